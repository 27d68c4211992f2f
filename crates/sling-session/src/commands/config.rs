//! # Config Commands
//!
//! Retrieving the customizer configuration.

use tracing::debug;

use crate::config::CustomizerConfig;

/// Gets the current customizer configuration.
///
/// ## When Used
/// - Mount (currency symbol, delays)
/// - Share button (preview URL)
pub fn get_config(config: &CustomizerConfig) -> CustomizerConfig {
    debug!("get_config command");
    config.clone()
}
