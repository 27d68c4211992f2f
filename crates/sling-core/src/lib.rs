//! # sling-core: Selection and Pricing Logic for the Sling Bag Customizer
//!
//! This crate holds the state behind the customizer panel: which fabric,
//! strap style and strap color are selected, what that costs, and which
//! item currently shows a tooltip.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sling Customizer Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation layer                           │   │
//! │  │    Fabric grid ──► Strap buttons ──► Color swatches ──► Preview │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands (JSON)                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    sling-session                                │   │
//! │  │    config, tracing, tokio timers, Arc<Mutex<..>> state          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sling-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ selection │  │  pricing  │  │   hover   │  │   │
//! │  │   │ Catalogs  │  │ Selection │  │ total,    │  │ Transient │  │   │
//! │  │   │ builtin() │  │   Store   │  │ summaries │  │  UiState  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └─────┬─────┘  │   │
//! │  │                                                       │        │   │
//! │  │                              timer::DismissScheduler ◄┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • CLOCK INJECTED THROUGH A TRAIT          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Option records, axes and hover targets
//! - [`catalog`] - Validated option lists and the built-in catalog
//! - [`selection`] - `Configuration` and `SelectionStore`
//! - [`pricing`] - Total price, breakdown, section summaries
//! - [`money`] - Integer `Money` and price formatting
//! - [`timer`] - Single-slot auto-dismiss timer
//! - [`hover`] - `TransientUiState` (tooltip target)
//! - [`share`] - Share link encoding
//! - [`error`] / [`validation`] - Typed errors and catalog checks
//!
//! ## Example Usage
//!
//! ```rust
//! use sling_core::SelectionStore;
//!
//! let mut store = SelectionStore::with_builtin_catalog().unwrap();
//! store.select_strap_style("padded-orange").unwrap();
//! store.select_strap_color("gray").unwrap();
//!
//! assert_eq!(store.total_price().amount(), 11300);
//! assert!(store.select_fabric("tartan").is_err());
//! ```

use std::time::Duration;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod hover;
pub mod money;
pub mod pricing;
pub mod selection;
pub mod share;
pub mod timer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, Catalogs};
pub use error::{CoreError, CoreResult, ValidationError};
pub use hover::TransientUiState;
pub use money::{format_price, surcharge_label, Money};
pub use pricing::{selection_summary, total_price, PriceBreakdown, SelectionSummary};
pub use selection::{Configuration, SelectionIds, SelectionStore};
pub use share::{apply_share_link, ShareLink};
pub use timer::{DismissScheduler, DismissTicket, TimedSlot};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Price of the bag with the free strap and strap color.
pub const BASE_PRICE: i64 = 8100;

/// Fabric selected when the customizer opens.
pub const DEFAULT_FABRIC_ID: &str = "red-grid";

/// Strap style selected when the customizer opens.
pub const DEFAULT_STRAP_ID: &str = "flat-black";

/// Strap color selected when the customizer opens.
pub const DEFAULT_STRAP_COLOR_ID: &str = "black";

/// How long a tooltip stays up without further pointer activity.
pub const DEFAULT_HOVER_DISMISS: Duration = Duration::from_millis(5000);

/// How long the "link copied" notice stays up.
pub const DEFAULT_COPIED_NOTICE: Duration = Duration::from_millis(2000);
