//! # Selection Commands
//!
//! Catalog listing, the current configuration, and option selection.
//!
//! ## Panel Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FABRIC                               Gridstop Chili                    │
//! │  [■] [■] [■] [■] [■] [■]                                                │
//! │                                                                         │
//! │  STRAP                                Lite Strap                        │
//! │  [Flat Strap]  [Lite Strap +₹2,100.00]                                  │
//! │                                                                         │
//! │  STRAP COLOR                          Gray Lite Strap                   │
//! │  [●] [● +₹1,100.00]                                                     │
//! │                                                                         │
//! │  TOTAL                                ₹11,300.00                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use sling_core::{
    selection_summary, surcharge_label, Axis, CatalogItem, Configuration, Money, PriceBreakdown,
    SelectionStore, SelectionSummary,
};

use crate::config::CustomizerConfig;
use crate::error::ApiError;
use crate::state::SelectionState;

/// Current configuration with everything the preview header shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    pub configuration: Configuration,
    pub price: PriceBreakdown,
    /// Total formatted for display, e.g. `₹8,100.00`.
    pub display_total: String,
    pub summary: SelectionSummary,
}

impl ConfigurationResponse {
    pub fn from_store(store: &SelectionStore, currency_symbol: &str) -> Self {
        let price = store.price_breakdown();
        ConfigurationResponse {
            configuration: store.current_configuration(),
            display_total: price.display_total(currency_symbol),
            price,
            summary: selection_summary(store.configuration()),
        }
    }
}

/// One selectable button or swatch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub id: String,
    pub name: String,
    pub color: String,
    pub price: Money,
    /// `+₹2,100.00` badge, absent for free options.
    pub surcharge_label: Option<String>,
    pub selected: bool,
}

impl OptionView {
    fn build<T: CatalogItem>(item: &T, config: &Configuration, symbol: &str) -> Self {
        OptionView {
            id: item.id().to_string(),
            name: item.name().to_string(),
            color: item.color().to_string(),
            price: item.price(),
            surcharge_label: surcharge_label(item.price(), symbol),
            selected: config.is_selected(T::AXIS, item.id()),
        }
    }
}

/// All three option lists, in display order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub fabrics: Vec<OptionView>,
    pub straps: Vec<OptionView>,
    pub strap_colors: Vec<OptionView>,
}

/// Gets the catalog with the current selection marked.
pub fn get_catalog(selection: &SelectionState, config: &CustomizerConfig) -> CatalogResponse {
    debug!("get_catalog command");
    let symbol = config.currency_symbol();

    selection.with_store(|store| {
        let current = store.configuration();
        let catalogs = store.catalogs();
        CatalogResponse {
            fabrics: catalogs
                .fabrics
                .iter()
                .map(|f| OptionView::build(f, current, symbol))
                .collect(),
            straps: catalogs
                .straps
                .iter()
                .map(|s| OptionView::build(s, current, symbol))
                .collect(),
            strap_colors: catalogs
                .strap_colors
                .iter()
                .map(|c| OptionView::build(c, current, symbol))
                .collect(),
        }
    })
}

/// Gets the current configuration and its price.
pub fn get_configuration(
    selection: &SelectionState,
    config: &CustomizerConfig,
) -> ConfigurationResponse {
    debug!("get_configuration command");
    selection.with_store(|store| ConfigurationResponse::from_store(store, config.currency_symbol()))
}

/// Selects `id` on `axis`.
///
/// ## Errors
/// `INVALID_SELECTION` if `id` is not in that axis catalog; the
/// configuration is unchanged.
pub fn select_option(
    selection: &SelectionState,
    config: &CustomizerConfig,
    axis: Axis,
    id: &str,
) -> Result<ConfigurationResponse, ApiError> {
    debug!(axis = %axis, id = %id, "select_option command");

    selection.with_store_mut(|store| {
        if let Err(e) = store.select(axis, id) {
            warn!(axis = %axis, id = %id, "Rejected selection outside catalog");
            return Err(ApiError::from(e));
        }
        Ok(ConfigurationResponse::from_store(store, config.currency_symbol()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn state() -> SelectionState {
        SelectionState::new(SelectionStore::with_builtin_catalog().unwrap())
    }

    #[test]
    fn test_get_configuration_defaults() {
        let config = CustomizerConfig::default();
        let response = get_configuration(&state(), &config);
        assert_eq!(response.display_total, "₹8,100.00");
        assert_eq!(response.price.total, Money::new(8100));
        assert_eq!(response.summary.strap_color, "Black Flat Strap");
    }

    #[test]
    fn test_select_option_updates_total() {
        let config = CustomizerConfig::default();
        let selection = state();

        select_option(&selection, &config, Axis::Strap, "padded-orange").unwrap();
        let response = select_option(&selection, &config, Axis::StrapColor, "gray").unwrap();
        assert_eq!(response.display_total, "₹11,300.00");
        assert_eq!(response.summary.strap_color, "Gray Lite Strap");
    }

    #[test]
    fn test_select_option_rejects_unknown_id() {
        let config = CustomizerConfig::default();
        let selection = state();

        let err = select_option(&selection, &config, Axis::Fabric, "plaid").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelection);
        assert_eq!(
            get_configuration(&selection, &config).configuration.fabric.id,
            "red-grid"
        );
    }

    #[test]
    fn test_catalog_marks_selection_and_surcharges() {
        let config = CustomizerConfig::default();
        let catalog = get_catalog(&state(), &config);

        assert_eq!(catalog.fabrics.len(), 6);
        assert_eq!(catalog.fabrics.iter().filter(|f| f.selected).count(), 1);
        assert!(catalog.fabrics.iter().all(|f| f.surcharge_label.is_none()));

        let lite = catalog.straps.iter().find(|s| s.id == "padded-orange").unwrap();
        assert_eq!(lite.surcharge_label.as_deref(), Some("+₹2,100.00"));
        assert!(!lite.selected);

        let gray = catalog.strap_colors.iter().find(|c| c.id == "gray").unwrap();
        assert_eq!(gray.surcharge_label.as_deref(), Some("+₹1,100.00"));
    }
}
