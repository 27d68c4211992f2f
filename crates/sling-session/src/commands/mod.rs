//! # Commands Module
//!
//! Everything the presentation layer may call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── selection.rs  ◄─── Catalog, current configuration, select_option
//! ├── hover.rs      ◄─── Tooltip target
//! ├── share.rs      ◄─── Share links and the copied notice
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Presentation layer                                                     │
//! │  ──────────────────                                                     │
//! │  onClick(() => selectOption('strap', 'padded-orange'))                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  fn select_option(                                                      │
//! │      selection: &SelectionState,  ◄── only the state it needs           │
//! │      config: &CustomizerConfig,                                         │
//! │      axis: Axis, id: &str,                                              │
//! │  ) -> Result<ConfigurationResponse, ApiError>                           │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  { configuration, price, displayTotal: "₹10,200.00", summary }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod hover;
pub mod selection;
pub mod share;

pub use config::get_config;
pub use hover::{clear_hover, get_hover, set_hover, HoverResponse};
pub use selection::{
    get_catalog, get_configuration, select_option, CatalogResponse, ConfigurationResponse,
    OptionView,
};
pub use share::{create_share_link, get_copied_notice, open_share_link, ShareLinkResponse};
