//! # Share Commands
//!
//! Producing and opening share links.
//!
//! ## Share Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "Share" button ──► create_share_link ──► url + copied notice (2 s)    │
//! │                                                                         │
//! │  Preview page   ──► open_share_link(url) ──► all three ids applied,    │
//! │                                              or INVALID_* and nothing  │
//! │                                              changes                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use sling_core::{apply_share_link, ShareLink};

use crate::commands::selection::ConfigurationResponse;
use crate::config::CustomizerConfig;
use crate::error::ApiError;
use crate::state::{CopiedNotice, NoticeState, SelectionState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinkResponse {
    pub url: String,
    pub notice: CopiedNotice,
}

/// Builds a share link for the current configuration and shows the copied
/// notice.
pub fn create_share_link(
    selection: &SelectionState,
    notice: &NoticeState,
    config: &CustomizerConfig,
) -> Result<ShareLinkResponse, ApiError> {
    debug!("create_share_link command");

    let link = selection.with_store(|store| ShareLink::from_configuration(store.configuration()));
    let url = link.to_url(&config.share.preview_url)?;

    let notice = notice.show(url.clone());

    info!(url = %url, "Share link created");
    Ok(ShareLinkResponse { url, notice })
}

/// Restores the configuration encoded in `url`.
///
/// ## Errors
/// - `INVALID_SHARE_LINK`: not a URL, no `config` parameter, bad JSON
/// - `INVALID_SELECTION`: an id that is not in the catalog
pub fn open_share_link(
    selection: &SelectionState,
    config: &CustomizerConfig,
    url: &str,
) -> Result<ConfigurationResponse, ApiError> {
    debug!(url = %url, "open_share_link command");

    let link = ShareLink::from_url(url)?;
    let result = selection.with_store_mut(|store| {
        apply_share_link(store, &link)?;
        Ok::<ConfigurationResponse, ApiError>(ConfigurationResponse::from_store(
            store,
            config.currency_symbol(),
        ))
    });

    if result.is_ok() {
        info!("Share link applied");
    }
    result
}

/// Gets the copied notice if it is still visible.
pub fn get_copied_notice(notice: &NoticeState) -> Option<CopiedNotice> {
    notice.current()
}
