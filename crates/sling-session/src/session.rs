//! # Customizer Session
//!
//! One mounted customizer: its selection, tooltip and copied notice.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  mount(config) ──► id = Uuid::new_v4(), mounted_at = Utc::now()         │
//! │        │           store at config defaults                             │
//! │        ▼                                                                │
//! │   commands (select, hover, share) ... any number of times              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  dispose() / drop ──► pending tooltip + notice timers aborted           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tracing::info;
use uuid::Uuid;

use sling_core::{Catalogs, Money, SelectionStore};

use crate::config::CustomizerConfig;
use crate::error::{SessionError, SessionResult};
use crate::state::{HoverState, NoticeState, SelectionState};

/// A mounted customizer instance.
#[derive(Debug)]
pub struct CustomizerSession {
    id: Uuid,
    mounted_at: DateTime<Utc>,
    config: Arc<CustomizerConfig>,
    selection: SelectionState,
    hover: HoverState,
    notice: NoticeState,
}

impl CustomizerSession {
    /// Mounts a session on the current tokio runtime.
    ///
    /// Fails with [`SessionError::NoRuntime`] outside a runtime.
    pub fn mount(config: CustomizerConfig) -> SessionResult<Self> {
        let runtime = Handle::try_current().map_err(|_| SessionError::NoRuntime)?;
        Self::mount_on(config, runtime)
    }

    /// Mounts a session whose timers run on `runtime`.
    pub fn mount_on(config: CustomizerConfig, runtime: Handle) -> SessionResult<Self> {
        config.validate()?;

        let id = Uuid::new_v4();
        let catalogs = Arc::new(Catalogs::builtin()?);
        let store = SelectionStore::new(
            catalogs,
            Money::new(config.pricing.base_price),
            &config.defaults.selection_ids(),
        )?;

        let hover = HoverState::new(runtime.clone(), config.hover_delay(), id);
        let notice = NoticeState::new(runtime, config.copied_notice_delay(), id);

        let session = CustomizerSession {
            id,
            mounted_at: Utc::now(),
            config: Arc::new(config),
            selection: SelectionState::new(store),
            hover,
            notice,
        };

        info!(
            session_id = %session.id,
            fabric = %session.config.defaults.fabric,
            total = %session.selection.with_store(|s| s.total_price()),
            "Customizer session mounted"
        );
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mounted_at(&self) -> DateTime<Utc> {
        self.mounted_at
    }

    pub fn config(&self) -> &CustomizerConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn notice(&self) -> &NoticeState {
        &self.notice
    }

    /// Tears the session down. Pending timers are aborted even when other
    /// handles to the hover or notice state are still alive.
    pub fn dispose(self) {
        drop(self);
    }
}

impl Drop for CustomizerSession {
    fn drop(&mut self) {
        self.hover.dispose();
        self.notice.dispose();

        let alive = Utc::now().signed_duration_since(self.mounted_at);
        info!(
            session_id = %self.id,
            alive_ms = alive.num_milliseconds(),
            "Customizer session disposed"
        );
    }
}
