//! # Customizer Configuration
//!
//! Shop-level settings for the customizer: base price, currency symbol,
//! opening selection, and dismiss delays.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Defaults (this file)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  2. customizer.toml (platform config dir, or an explicit path)          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  3. SLING_* environment variables                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  4. validate()  ── default ids exist, delays > 0, http(s) preview URL   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # customizer.toml
//! [pricing]
//! base_price = 8100
//! currency_symbol = "₹"
//!
//! [defaults]
//! fabric = "red-grid"
//! strap = "flat-black"
//! strap_color = "black"
//!
//! [hover]
//! dismiss_delay_ms = 5000
//!
//! [share]
//! preview_url = "http://localhost:8080/bag-preview"
//! copied_notice_ms = 2000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use sling_core::validation::validate_base_price;
use sling_core::{
    Catalogs, Money, SelectionIds, BASE_PRICE, DEFAULT_COPIED_NOTICE, DEFAULT_FABRIC_ID,
    DEFAULT_HOVER_DISMISS, DEFAULT_STRAP_COLOR_ID, DEFAULT_STRAP_ID,
};

use crate::error::{SessionError, SessionResult};

/// File name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "customizer.toml";

// =============================================================================
// Pricing
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price of the bag before strap surcharges, in whole currency units.
    #[serde(default = "default_base_price")]
    pub base_price: i64,

    /// Symbol placed in front of every displayed amount.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_base_price() -> i64 {
    BASE_PRICE
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            base_price: default_base_price(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Opening Selection
// =============================================================================

/// Selection shown when a session mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_fabric")]
    pub fabric: String,

    #[serde(default = "default_strap")]
    pub strap: String,

    #[serde(default = "default_strap_color")]
    pub strap_color: String,
}

fn default_fabric() -> String {
    DEFAULT_FABRIC_ID.to_string()
}

fn default_strap() -> String {
    DEFAULT_STRAP_ID.to_string()
}

fn default_strap_color() -> String {
    DEFAULT_STRAP_COLOR_ID.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            fabric: default_fabric(),
            strap: default_strap(),
            strap_color: default_strap_color(),
        }
    }
}

impl DefaultsConfig {
    pub fn selection_ids(&self) -> SelectionIds {
        SelectionIds {
            fabric: self.fabric.clone(),
            strap: self.strap.clone(),
            strap_color: self.strap_color.clone(),
        }
    }
}

// =============================================================================
// Hover
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverConfig {
    /// Tooltip lifetime without further pointer activity.
    #[serde(default = "default_dismiss_delay")]
    pub dismiss_delay_ms: u64,
}

fn default_dismiss_delay() -> u64 {
    DEFAULT_HOVER_DISMISS.as_millis() as u64
}

impl Default for HoverConfig {
    fn default() -> Self {
        HoverConfig {
            dismiss_delay_ms: default_dismiss_delay(),
        }
    }
}

// =============================================================================
// Share
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Page that renders a shared configuration.
    #[serde(default = "default_preview_url")]
    pub preview_url: String,

    /// How long the "link copied" notice stays up.
    #[serde(default = "default_copied_notice")]
    pub copied_notice_ms: u64,
}

fn default_preview_url() -> String {
    "http://localhost:8080/bag-preview".to_string()
}

fn default_copied_notice() -> u64 {
    DEFAULT_COPIED_NOTICE.as_millis() as u64
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            preview_url: default_preview_url(),
            copied_notice_ms: default_copied_notice(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete customizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizerConfig {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub hover: HoverConfig,

    #[serde(default)]
    pub share: ShareConfig,
}

impl CustomizerConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (customizer.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SessionResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading customizer config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load customizer config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> SessionResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SessionError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SessionError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| SessionError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Customizer config saved");
        Ok(())
    }

    /// Validates the configuration against the built-in catalogs.
    pub fn validate(&self) -> SessionResult<()> {
        if self.pricing.base_price < 0 {
            return Err(SessionError::InvalidConfig(
                "base_price must not be negative".into(),
            ));
        }

        // Default ids must exist in their catalogs
        let catalogs = Catalogs::builtin()?;
        let ids = self.defaults.selection_ids();
        catalogs.fabrics.require(&ids.fabric)?;
        catalogs.straps.require(&ids.strap)?;
        catalogs.strap_colors.require(&ids.strap_color)?;

        // The largest reachable total must fit
        validate_base_price(Money::new(self.pricing.base_price), &catalogs)
            .map_err(|e| SessionError::InvalidConfig(format!("pricing.{}", e)))?;

        if self.hover.dismiss_delay_ms == 0 {
            return Err(SessionError::InvalidConfig(
                "hover.dismiss_delay_ms must be greater than 0".into(),
            ));
        }
        if self.share.copied_notice_ms == 0 {
            return Err(SessionError::InvalidConfig(
                "share.copied_notice_ms must be greater than 0".into(),
            ));
        }

        let url = Url::parse(&self.share.preview_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SessionError::InvalidUrl(format!(
                "Preview URL must start with http:// or https://, got: {}",
                self.share.preview_url
            )));
        }

        Ok(())
    }

    /// Applies `SLING_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable numbers are
    /// skipped with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(price) = lookup("SLING_BASE_PRICE") {
            match price.parse::<i64>() {
                Ok(p) => {
                    debug!(base_price = p, "Overriding base price from environment");
                    self.pricing.base_price = p;
                }
                Err(_) => warn!(value = %price, "Ignoring non-numeric SLING_BASE_PRICE"),
            }
        }

        if let Some(symbol) = lookup("SLING_CURRENCY_SYMBOL") {
            self.pricing.currency_symbol = symbol;
        }

        if let Some(id) = lookup("SLING_DEFAULT_FABRIC") {
            debug!(fabric = %id, "Overriding default fabric from environment");
            self.defaults.fabric = id;
        }

        if let Some(id) = lookup("SLING_DEFAULT_STRAP") {
            self.defaults.strap = id;
        }

        if let Some(id) = lookup("SLING_DEFAULT_STRAP_COLOR") {
            self.defaults.strap_color = id;
        }

        if let Some(ms) = lookup("SLING_HOVER_DISMISS_MS") {
            match ms.parse::<u64>() {
                Ok(v) => self.hover.dismiss_delay_ms = v,
                Err(_) => warn!(value = %ms, "Ignoring non-numeric SLING_HOVER_DISMISS_MS"),
            }
        }

        if let Some(url) = lookup("SLING_PREVIEW_URL") {
            debug!(url = %url, "Overriding preview URL from environment");
            self.share.preview_url = url;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sling", "customizer")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover.dismiss_delay_ms)
    }

    pub fn copied_notice_delay(&self) -> Duration {
        Duration::from_millis(self.share.copied_notice_ms)
    }

    pub fn currency_symbol(&self) -> &str {
        &self.pricing.currency_symbol
    }
}
