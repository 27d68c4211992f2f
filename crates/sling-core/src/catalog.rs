//! # Catalog Module
//!
//! Fixed, pre-validated option lists, one per axis.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Vec<T> ──► Catalog::new() ──► validate_catalog() ──► Catalog<T>        │
//! │                                   │                                     │
//! │                                   └── Err(ValidationError) (empty,      │
//! │                                       duplicate id, bad color, ...)     │
//! │                                                                         │
//! │  Catalogs { fabrics, straps, strap_colors } built once at startup,      │
//! │  wrapped in Arc, shared read-only by every SelectionStore.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{
    CatalogItem, FabricOption, FabricPattern, HexColor, StrapColorOption, StrapStyle,
    StrapStyleOption,
};
use crate::validation::{validate_catalog, validate_surcharges, ValidationResult};

// =============================================================================
// Catalog
// =============================================================================

/// An ordered, non-empty, id-unique list of options for one axis.
///
/// There is no way to build a `Catalog` that skips validation, so lookups
/// can rely on those invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Validates and wraps an option list.
    pub fn new(items: Vec<T>) -> ValidationResult<Self> {
        validate_catalog(&items)?;
        Ok(Catalog { items })
    }

    /// The most expensive option's price.
    pub fn max_price(&self) -> Money {
        self.items.iter().map(|item| item.price()).max().unwrap_or_default()
    }

    /// Finds an option by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Finds an option by id or fails with `InvalidSelection`.
    pub fn require(&self, id: &str) -> CoreResult<&T> {
        self.get(id)
            .ok_or_else(|| CoreError::invalid_selection(T::AXIS, id))
    }

    /// Checks whether an id belongs to this catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The first option in display order.
    pub fn first(&self) -> &T {
        // Non-empty is checked in `new`.
        &self.items[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Catalog Set
// =============================================================================

/// The three axis catalogs the customizer offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Catalogs {
    #[ts(as = "Vec<FabricOption>")]
    pub fabrics: Catalog<FabricOption>,
    #[ts(as = "Vec<StrapStyleOption>")]
    pub straps: Catalog<StrapStyleOption>,
    #[ts(as = "Vec<StrapColorOption>")]
    pub strap_colors: Catalog<StrapColorOption>,
}

impl Catalogs {
    /// Builds a catalog set from raw option lists.
    pub fn new(
        fabrics: Vec<FabricOption>,
        straps: Vec<StrapStyleOption>,
        strap_colors: Vec<StrapColorOption>,
    ) -> ValidationResult<Self> {
        let catalogs = Catalogs {
            fabrics: Catalog::new(fabrics)?,
            straps: Catalog::new(straps)?,
            strap_colors: Catalog::new(strap_colors)?,
        };
        validate_surcharges(&catalogs)?;
        Ok(catalogs)
    }

    /// Largest strap + strap color surcharge any configuration can reach.
    ///
    /// `None` if the two maxima overflow when added.
    pub fn max_surcharge(&self) -> Option<Money> {
        self.straps
            .max_price()
            .checked_add(self.strap_colors.max_price())
    }

    /// The catalog shipped with the storefront.
    ///
    /// ## Contents
    /// ```text
    /// Fabrics (6):  black-carbon, red-grid, green-diamond,
    ///               brown-leather, blue-wave, black-mesh
    /// Straps (2):   flat-black (+0), padded-orange (+2100)
    /// Colors (2):   black (+0), gray (+1100)
    /// ```
    pub fn builtin() -> ValidationResult<Self> {
        let fabrics = vec![
            fabric("black-carbon", "Black Carbon", FabricPattern::CarbonFiber, "#1a1a1a")?,
            fabric("red-grid", "Gridstop Chili", FabricPattern::Grid, "#dc2626")?,
            fabric("green-diamond", "Green Diamond", FabricPattern::Diamond, "#16a34a")?,
            fabric("brown-leather", "Brown Leather", FabricPattern::Leather, "#a16207")?,
            fabric("blue-wave", "Blue Wave", FabricPattern::Wave, "#2563eb")?,
            fabric("black-mesh", "Gridstop Black", FabricPattern::Mesh, "#374151")?,
        ];

        let straps = vec![
            strap("flat-black", "Flat Strap", StrapStyle::Flat, "#1a1a1a", 0)?,
            strap("padded-orange", "Lite Strap", StrapStyle::Padded, "#ea580c", 2100)?,
        ];

        let strap_colors = vec![
            strap_color("black", "Black", "#1a1a1a", 0)?,
            strap_color("gray", "Gray", "#6b7280", 1100)?,
        ];

        Catalogs::new(fabrics, straps, strap_colors)
    }
}

fn fabric(
    id: &str,
    name: &str,
    pattern: FabricPattern,
    color: &str,
) -> ValidationResult<FabricOption> {
    Ok(FabricOption {
        id: id.to_string(),
        name: name.to_string(),
        pattern,
        color: HexColor::parse(color)?,
    })
}

fn strap(
    id: &str,
    name: &str,
    style: StrapStyle,
    color: &str,
    price: i64,
) -> ValidationResult<StrapStyleOption> {
    Ok(StrapStyleOption {
        id: id.to_string(),
        name: name.to_string(),
        style,
        color: HexColor::parse(color)?,
        price: Money::new(price),
    })
}

fn strap_color(id: &str, name: &str, color: &str, price: i64) -> ValidationResult<StrapColorOption> {
    Ok(StrapColorOption {
        id: id.to_string(),
        name: name.to_string(),
        color: HexColor::parse(color)?,
        price: Money::new(price),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::Axis;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalogs = Catalogs::builtin().unwrap();
        assert_eq!(catalogs.fabrics.len(), 6);
        assert_eq!(catalogs.straps.len(), 2);
        assert_eq!(catalogs.strap_colors.len(), 2);

        let chili = catalogs.fabrics.get("red-grid").unwrap();
        assert_eq!(chili.name, "Gridstop Chili");
        assert_eq!(chili.pattern, FabricPattern::Grid);

        let lite = catalogs.straps.get("padded-orange").unwrap();
        assert_eq!(lite.price, Money::new(2100));
        assert_eq!(lite.style, StrapStyle::Padded);

        assert_eq!(catalogs.strap_colors.get("gray").unwrap().price, Money::new(1100));
    }

    #[test]
    fn test_builtin_order_is_display_order() {
        let catalogs = Catalogs::builtin().unwrap();
        let ids: Vec<&str> = catalogs.fabrics.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "black-carbon",
                "red-grid",
                "green-diamond",
                "brown-leather",
                "blue-wave",
                "black-mesh"
            ]
        );
        assert_eq!(catalogs.fabrics.first().id, "black-carbon");
    }

    #[test]
    fn test_require_unknown_id() {
        let catalogs = Catalogs::builtin().unwrap();
        let err = catalogs.straps.require("rope").unwrap_err();
        assert_eq!(err, CoreError::invalid_selection(Axis::Strap, "rope"));
        assert!(!catalogs.straps.contains("rope"));
    }

    #[test]
    fn test_new_rejects_empty_catalog() {
        let err = Catalogs::new(Vec::new(), Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyCatalog { axis: Axis::Fabric });
    }

    #[test]
    fn test_max_surcharge() {
        let catalogs = Catalogs::builtin().unwrap();
        assert_eq!(catalogs.straps.max_price(), Money::new(2100));
        assert_eq!(catalogs.max_surcharge(), Some(Money::new(3200)));
    }

    #[test]
    fn test_new_rejects_surcharges_that_overflow() {
        let builtin = Catalogs::builtin().unwrap();
        let fabrics: Vec<FabricOption> = builtin.fabrics.iter().cloned().collect();
        let straps = vec![strap("flat-black", "Flat Strap", StrapStyle::Flat, "#1a1a1a", i64::MAX).unwrap()];
        let colors = vec![strap_color("gray", "Gray", "#6b7280", 1).unwrap()];

        let err = Catalogs::new(fabrics, straps, colors).unwrap_err();
        assert!(matches!(err, ValidationError::PriceOverflow { .. }));
    }

    #[test]
    fn test_catalog_serializes_as_array() {
        let catalogs = Catalogs::builtin().unwrap();
        let json = serde_json::to_value(&catalogs).unwrap();
        assert_eq!(json["strapColors"].as_array().unwrap().len(), 2);
        assert_eq!(json["straps"][1]["price"], 2100);
        assert_eq!(json["fabrics"][0]["pattern"], "carbon-fiber");
    }
}
