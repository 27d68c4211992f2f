//! # Pricing Module
//!
//! Price derivation and the price / summary strings shown in the panel.
//!
//! ## Pricing Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   total = base + strap.price + strap_color.price                        │
//! │                                                                         │
//! │   8100  +  0     +  0     =  8100   (defaults)                          │
//! │   8100  +  2100  +  1100  = 11300   (Lite Strap, Gray)                  │
//! │                                                                         │
//! │   The fabric never changes the price. No discounts, no rounding,        │
//! │   no combination-dependent pricing.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::money::{format_price, Money};
use crate::selection::Configuration;

/// Total price of a configuration.
#[inline]
pub fn total_price(base: Money, config: &Configuration) -> Money {
    base + config.strap.price + config.strap_color.price
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Per-line prices making up the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: Money,
    pub strap: Money,
    pub strap_color: Money,
    pub total: Money,
}

impl PriceBreakdown {
    pub fn for_configuration(base: Money, config: &Configuration) -> Self {
        PriceBreakdown {
            base,
            strap: config.strap.price,
            strap_color: config.strap_color.price,
            total: total_price(base, config),
        }
    }

    /// The total as shown in the preview header, e.g. `₹11,300.00`.
    pub fn display_total(&self, symbol: &str) -> String {
        format_price(self.total, symbol)
    }
}

// =============================================================================
// Section Summaries
// =============================================================================

/// Names shown next to each section header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub fabric: String,
    pub strap: String,
    /// Color name followed by the selected strap's name, e.g. `Gray Lite Strap`.
    pub strap_color: String,
}

/// Builds the section header summaries for a configuration.
///
/// The strap color line always uses the selected strap's name.
pub fn selection_summary(config: &Configuration) -> SelectionSummary {
    SelectionSummary {
        fabric: config.fabric.name.clone(),
        strap: config.strap.name.clone(),
        strap_color: format!("{} {}", config.strap_color.name, config.strap.name),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionStore;

    #[test]
    fn test_breakdown_defaults() {
        let store = SelectionStore::with_builtin_catalog().unwrap();
        let breakdown = store.price_breakdown();
        assert_eq!(breakdown.base, Money::new(8100));
        assert_eq!(breakdown.strap, Money::zero());
        assert_eq!(breakdown.strap_color, Money::zero());
        assert_eq!(breakdown.total, Money::new(8100));
        assert_eq!(breakdown.display_total("₹"), "₹8,100.00");
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let mut store = SelectionStore::with_builtin_catalog().unwrap();
        store.select_strap_style("padded-orange").unwrap();
        store.select_strap_color("gray").unwrap();

        let b = store.price_breakdown();
        assert_eq!(b.base + b.strap + b.strap_color, b.total);
        assert_eq!(b.total, Money::new(11300));
        assert_eq!(b.total, store.total_price());
    }

    #[test]
    fn test_total_ignores_fabric() {
        let mut store = SelectionStore::with_builtin_catalog().unwrap();
        let catalogs = std::sync::Arc::clone(store.catalogs());
        for fabric in catalogs.fabrics.iter() {
            store.select_fabric(&fabric.id).unwrap();
            assert_eq!(store.total_price(), Money::new(8100));
        }
    }

    #[test]
    fn test_summary_follows_selected_strap() {
        let mut store = SelectionStore::with_builtin_catalog().unwrap();
        store.select_strap_color("gray").unwrap();

        let summary = selection_summary(store.configuration());
        assert_eq!(summary.fabric, "Gridstop Chili");
        assert_eq!(summary.strap, "Flat Strap");
        assert_eq!(summary.strap_color, "Gray Flat Strap");

        store.select_strap_style("padded-orange").unwrap();
        let summary = selection_summary(store.configuration());
        assert_eq!(summary.strap_color, "Gray Lite Strap");
    }
}
