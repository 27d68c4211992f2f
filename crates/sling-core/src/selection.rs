//! # Selection Module
//!
//! The current configuration and the store that owns it.
//!
//! ## Selection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Operations                                 │
//! │                                                                         │
//! │  UI Action               Store Method              State Change         │
//! │  ─────────               ────────────              ────────────         │
//! │                                                                         │
//! │  Click fabric ──────────► select_fabric(id) ──────► current.fabric      │
//! │                                                                         │
//! │  Click strap ───────────► select_strap_style(id) ─► current.strap       │
//! │                                                                         │
//! │  Click colour ──────────► select_strap_color(id) ─► current.strap_color │
//! │                                                                         │
//! │  Open share link ───────► apply(ids) ─────────────► all three at once   │
//! │                                                                         │
//! │  Render ────────────────► current_configuration() (read only)           │
//! │                          total_price()                                  │
//! │                                                                         │
//! │  Unknown id at any write: Err(InvalidSelection), nothing changes.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;

use crate::catalog::Catalogs;
use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::{self, PriceBreakdown};
use crate::types::{Axis, FabricOption, StrapColorOption, StrapStyleOption};
use crate::validation::validate_base_price;
use crate::{BASE_PRICE, DEFAULT_FABRIC_ID, DEFAULT_STRAP_COLOR_ID, DEFAULT_STRAP_ID};

// =============================================================================
// Configuration
// =============================================================================

/// One selected option per axis.
///
/// There is no "unselected" state; a configuration always has all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub fabric: FabricOption,
    pub strap: StrapStyleOption,
    pub strap_color: StrapColorOption,
}

impl Configuration {
    /// The ids of the three selected options.
    pub fn ids(&self) -> SelectionIds {
        SelectionIds {
            fabric: self.fabric.id.clone(),
            strap: self.strap.id.clone(),
            strap_color: self.strap_color.id.clone(),
        }
    }

    /// The id selected on one axis.
    pub fn id_for(&self, axis: Axis) -> &str {
        match axis {
            Axis::Fabric => &self.fabric.id,
            Axis::Strap => &self.strap.id,
            Axis::StrapColor => &self.strap_color.id,
        }
    }

    /// Checks whether `id` is the selected option on `axis`.
    pub fn is_selected(&self, axis: Axis, id: &str) -> bool {
        self.id_for(axis) == id
    }
}

/// Option ids for all three axes.
///
/// Used for defaults and share links, where only keys travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectionIds {
    pub fabric: String,
    pub strap: String,
    pub strap_color: String,
}

impl Default for SelectionIds {
    /// The selection shown when the customizer opens: Gridstop Chili with
    /// the free flat strap in black.
    fn default() -> Self {
        SelectionIds {
            fabric: DEFAULT_FABRIC_ID.to_string(),
            strap: DEFAULT_STRAP_ID.to_string(),
            strap_color: DEFAULT_STRAP_COLOR_ID.to_string(),
        }
    }
}

// =============================================================================
// Selection Store
// =============================================================================

/// Holds the current configuration and derives its price.
///
/// ## Invariants
/// - Every field of the configuration is an option of the store's catalogs
/// - A failed write leaves the configuration untouched
/// - The total is recomputed on every read
#[derive(Debug, Clone)]
pub struct SelectionStore {
    catalogs: Arc<Catalogs>,
    base_price: Money,
    current: Configuration,
}

impl SelectionStore {
    /// Creates a store positioned on `defaults`.
    ///
    /// Fails with `InvalidSelection` if a default id is not in its catalog,
    /// or with a validation error if `base_price` is negative or so large
    /// that a total could overflow.
    pub fn new(catalogs: Arc<Catalogs>, base_price: Money, defaults: &SelectionIds) -> CoreResult<Self> {
        validate_base_price(base_price, &catalogs)?;
        let current = resolve(&catalogs, defaults)?;
        Ok(SelectionStore {
            catalogs,
            base_price,
            current,
        })
    }

    /// A store over the built-in catalog with the storefront defaults.
    ///
    /// ## Example
    /// ```rust
    /// use sling_core::SelectionStore;
    ///
    /// let store = SelectionStore::with_builtin_catalog().unwrap();
    /// assert_eq!(store.current_configuration().fabric.name, "Gridstop Chili");
    /// assert_eq!(store.total_price().amount(), 8100);
    /// ```
    pub fn with_builtin_catalog() -> CoreResult<Self> {
        let catalogs = Arc::new(Catalogs::builtin()?);
        SelectionStore::new(catalogs, Money::new(BASE_PRICE), &SelectionIds::default())
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Selects a fabric. Strap and strap color are left as they are.
    pub fn select_fabric(&mut self, id: &str) -> CoreResult<&Configuration> {
        let fabric = self.catalogs.fabrics.require(id)?.clone();
        self.current = Configuration {
            fabric,
            ..self.current.clone()
        };
        Ok(&self.current)
    }

    /// Selects a strap style. Fabric and strap color are left as they are.
    pub fn select_strap_style(&mut self, id: &str) -> CoreResult<&Configuration> {
        let strap = self.catalogs.straps.require(id)?.clone();
        self.current = Configuration {
            strap,
            ..self.current.clone()
        };
        Ok(&self.current)
    }

    /// Selects a strap color. Fabric and strap style are left as they are.
    pub fn select_strap_color(&mut self, id: &str) -> CoreResult<&Configuration> {
        let strap_color = self.catalogs.strap_colors.require(id)?.clone();
        self.current = Configuration {
            strap_color,
            ..self.current.clone()
        };
        Ok(&self.current)
    }

    /// Dispatches to the `select_*` method for `axis`.
    pub fn select(&mut self, axis: Axis, id: &str) -> CoreResult<&Configuration> {
        match axis {
            Axis::Fabric => self.select_fabric(id),
            Axis::Strap => self.select_strap_style(id),
            Axis::StrapColor => self.select_strap_color(id),
        }
    }

    /// Replaces all three selections at once.
    ///
    /// Every id is resolved before anything changes, so either all three
    /// axes move or none do.
    pub fn apply(&mut self, ids: &SelectionIds) -> CoreResult<&Configuration> {
        self.current = resolve(&self.catalogs, ids)?;
        Ok(&self.current)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// An owned snapshot of the current configuration.
    pub fn current_configuration(&self) -> Configuration {
        self.current.clone()
    }

    /// Borrowing access to the current configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.current
    }

    /// `base + strap.price + strap_color.price`.
    pub fn total_price(&self) -> Money {
        pricing::total_price(self.base_price, &self.current)
    }

    /// Per-line prices for the current configuration.
    pub fn price_breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::for_configuration(self.base_price, &self.current)
    }

    pub fn base_price(&self) -> Money {
        self.base_price
    }

    pub fn catalogs(&self) -> &Arc<Catalogs> {
        &self.catalogs
    }
}

fn resolve(catalogs: &Catalogs, ids: &SelectionIds) -> CoreResult<Configuration> {
    Ok(Configuration {
        fabric: catalogs.fabrics.require(&ids.fabric)?.clone(),
        strap: catalogs.straps.require(&ids.strap)?.clone(),
        strap_color: catalogs.strap_colors.require(&ids.strap_color)?.clone(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn store() -> SelectionStore {
        SelectionStore::with_builtin_catalog().unwrap()
    }

    #[test]
    fn test_default_configuration() {
        let store = store();
        let config = store.current_configuration();
        assert_eq!(config.fabric.id, "red-grid");
        assert_eq!(config.fabric.name, "Gridstop Chili");
        assert_eq!(config.strap.id, "flat-black");
        assert_eq!(config.strap_color.id, "black");
        assert_eq!(store.total_price(), Money::new(8100));
    }

    #[test]
    fn test_select_each_fabric_leaves_other_axes() {
        let mut store = store();
        store.select_strap_style("padded-orange").unwrap();
        store.select_strap_color("gray").unwrap();

        let fabric_ids: Vec<String> = store.catalogs().fabrics.iter().map(|f| f.id.clone()).collect();
        for id in fabric_ids {
            let before = store.current_configuration();
            let after = store.select_fabric(&id).unwrap().clone();
            assert_eq!(after.fabric.id, id);
            assert_eq!(after.strap, before.strap);
            assert_eq!(after.strap_color, before.strap_color);
        }
    }

    #[test]
    fn test_select_each_strap_and_color_leaves_other_axes() {
        let mut store = store();
        let catalogs = Arc::clone(store.catalogs());

        for strap in catalogs.straps.iter() {
            let before = store.current_configuration();
            let after = store.select_strap_style(&strap.id).unwrap().clone();
            assert_eq!(after.strap.id, strap.id);
            assert_eq!(after.fabric, before.fabric);
            assert_eq!(after.strap_color, before.strap_color);
        }

        for color in catalogs.strap_colors.iter() {
            let before = store.current_configuration();
            let after = store.select_strap_color(&color.id).unwrap().clone();
            assert_eq!(after.strap_color.id, color.id);
            assert_eq!(after.fabric, before.fabric);
            assert_eq!(after.strap, before.strap);
        }
    }

    #[test]
    fn test_total_price_tracks_selection() {
        let mut store = store();
        store.select_strap_style("padded-orange").unwrap();
        assert_eq!(store.total_price(), Money::new(10200));

        store.select_strap_color("gray").unwrap();
        assert_eq!(store.total_price(), Money::new(11300));

        store.select_fabric("blue-wave").unwrap();
        assert_eq!(store.total_price(), Money::new(11300));

        store.select_strap_style("flat-black").unwrap();
        assert_eq!(store.total_price(), Money::new(9200));
    }

    #[test]
    fn test_unknown_id_leaves_configuration_unchanged() {
        let mut store = store();
        store.select_strap_color("gray").unwrap();
        let before = store.current_configuration();

        for axis in Axis::ALL {
            let err = store.select(axis, "does-not-exist").unwrap_err();
            assert_eq!(err, CoreError::invalid_selection(axis, "does-not-exist"));
            assert_eq!(store.current_configuration(), before);
        }
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut store = store();
        let before = store.current_configuration();

        let bad = SelectionIds {
            fabric: "blue-wave".to_string(),
            strap: "padded-orange".to_string(),
            strap_color: "neon".to_string(),
        };
        assert!(matches!(
            store.apply(&bad),
            Err(CoreError::InvalidSelection {
                axis: Axis::StrapColor,
                ..
            })
        ));
        assert_eq!(store.current_configuration(), before);

        let good = SelectionIds {
            strap_color: "gray".to_string(),
            ..bad
        };
        let config = store.apply(&good).unwrap();
        assert_eq!(config.ids(), good);
    }

    #[test]
    fn test_new_rejects_unknown_default() {
        let catalogs = Arc::new(Catalogs::builtin().unwrap());
        let defaults = SelectionIds {
            fabric: "tartan".to_string(),
            ..SelectionIds::default()
        };
        let err = SelectionStore::new(catalogs, Money::new(BASE_PRICE), &defaults).unwrap_err();
        assert_eq!(err, CoreError::invalid_selection(Axis::Fabric, "tartan"));
    }

    #[test]
    fn test_new_rejects_base_price_that_could_overflow() {
        let catalogs = Arc::new(Catalogs::builtin().unwrap());
        let defaults = SelectionIds::default();

        let err = SelectionStore::new(catalogs.clone(), Money::new(i64::MAX), &defaults).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::PriceOverflow { .. })
        ));

        // Largest base that still leaves room for padded-orange + gray.
        let max_base = Money::new(i64::MAX - 3200);
        let mut store = SelectionStore::new(catalogs, max_base, &defaults).unwrap();
        store.select_strap_style("padded-orange").unwrap();
        store.select_strap_color("gray").unwrap();
        assert_eq!(store.total_price(), Money::new(i64::MAX));
    }

    #[test]
    fn test_configuration_json_uses_camel_case() {
        let json = serde_json::to_value(store().current_configuration()).unwrap();
        assert_eq!(json["strapColor"]["id"], "black");
        assert_eq!(json["fabric"]["color"], "#dc2626");
    }
}
