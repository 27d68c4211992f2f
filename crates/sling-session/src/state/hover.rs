//! # Hover State
//!
//! [`TransientUiState`] driven by real tokio timers.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;
use uuid::Uuid;

use sling_core::{DismissTicket, HoverTarget, TransientUiState};

use crate::scheduler::{lock, shared_with_timer, TokioScheduler};

type SharedHover = Arc<Mutex<TransientUiState<TokioScheduler>>>;

/// Tooltip target with a tokio dismiss timer.
///
/// Handles are shared. [`HoverState::dispose`] cancels the timer for all of
/// them; dropping the last handle aborts it too.
#[derive(Debug, Clone)]
pub struct HoverState {
    inner: SharedHover,
    session_id: Uuid,
}

impl HoverState {
    pub fn new(runtime: Handle, dismiss_delay: Duration, session_id: Uuid) -> Self {
        let inner = shared_with_timer(
            runtime,
            |scheduler| TransientUiState::new(scheduler, dismiss_delay),
            move |ui: &mut TransientUiState<TokioScheduler>, ticket| {
                if ui.on_dismiss_elapsed(ticket) {
                    debug!(session_id = %session_id, ticket = ticket.value(), "Tooltip dismissed");
                }
            },
        );
        HoverState { inner, session_id }
    }

    pub fn set_hover(&self, target: HoverTarget) -> DismissTicket {
        debug!(session_id = %self.session_id, target = %target, "set_hover");
        lock(&self.inner).set_hover(target)
    }

    pub fn clear_hover(&self) {
        debug!(session_id = %self.session_id, "clear_hover");
        lock(&self.inner).clear_hover();
    }

    pub fn hover_target(&self) -> Option<HoverTarget> {
        lock(&self.inner).hover_target().cloned()
    }

    pub fn has_pending_timer(&self) -> bool {
        lock(&self.inner).has_pending_timer()
    }

    pub fn dismiss_delay(&self) -> Duration {
        lock(&self.inner).dismiss_delay()
    }

    /// Cancels the dismiss timer for every handle to this state.
    ///
    /// The target is left as it is; nothing clears it afterwards.
    pub fn dispose(&self) {
        lock(&self.inner).cancel_dismiss();
        debug!(session_id = %self.session_id, "Tooltip timer cancelled");
    }
}
