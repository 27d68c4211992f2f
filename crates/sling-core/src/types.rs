//! # Domain Types
//!
//! Catalog option types for the sling bag customizer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  FabricOption   │   │ StrapStyleOption│   │StrapColorOption │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  name           │       │
//! │  │  pattern        │   │  style          │   │  color          │       │
//! │  │  color          │   │  color, price   │   │  price          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ FabricPattern   │   │   StrapStyle    │   │   HoverTarget   │       │
//! │  │  carbon-fiber   │   │   flat          │   │  Fabric(id)     │       │
//! │  │  grid, diamond  │   │   padded        │   │  Strap(id)      │       │
//! │  │  leather, wave  │   └─────────────────┘   │  StrapColor(id) │       │
//! │  │  mesh           │                         │  Preview        │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All option records are immutable values. A selection change swaps which
//! record the configuration points at; records themselves never change.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Axis
// =============================================================================

/// One independently selectable facet of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Fabric,
    Strap,
    StrapColor,
}

impl Axis {
    /// All axes in the order the panel lists them.
    pub const ALL: [Axis; 3] = [Axis::Fabric, Axis::Strap, Axis::StrapColor];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Fabric => write!(f, "fabric"),
            Axis::Strap => write!(f, "strap"),
            Axis::StrapColor => write!(f, "strap color"),
        }
    }
}

// =============================================================================
// Hex Color
// =============================================================================

/// An `#RRGGBB` color string.
///
/// Deserialization goes through [`HexColor::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "String")]
#[ts(export)]
pub struct HexColor(String);

impl TryFrom<String> for HexColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

impl HexColor {
    /// Parses and normalizes (lowercase) a `#RRGGBB` color.
    ///
    /// ## Example
    /// ```rust
    /// use sling_core::types::HexColor;
    ///
    /// assert_eq!(HexColor::parse("#DC2626").unwrap().as_str(), "#dc2626");
    /// assert!(HexColor::parse("red").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "color".to_string(),
                reason: "must start with '#'".to_string(),
            })?;

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidFormat {
                field: "color".to_string(),
                reason: "must be six hex digits (#RRGGBB)".to_string(),
            });
        }

        Ok(HexColor(format!("#{}", hex.to_ascii_lowercase())))
    }

    /// Returns the color as `#rrggbb`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            self.0
                .get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(0)
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Fabric
// =============================================================================

/// Surface texture painted on the bag body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum FabricPattern {
    CarbonFiber,
    Grid,
    Diamond,
    Leather,
    Wave,
    Mesh,
}

/// A fabric the bag body can be made from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FabricOption {
    /// Unique key within the fabric catalog.
    pub id: String,
    /// Display name (shown as tooltip and section summary).
    pub name: String,
    pub pattern: FabricPattern,
    pub color: HexColor,
}

// =============================================================================
// Strap Style
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StrapStyle {
    /// Thin webbing strap.
    Flat,
    /// Thicker strap with a stitched inner border.
    Padded,
}

/// A strap construction option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrapStyleOption {
    pub id: String,
    pub name: String,
    pub style: StrapStyle,
    /// Swatch color used on the style button.
    pub color: HexColor,
    /// Surcharge over the base price.
    pub price: Money,
}

// =============================================================================
// Strap Color
// =============================================================================

/// A strap color option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrapColorOption {
    pub id: String,
    pub name: String,
    pub color: HexColor,
    /// Surcharge over the base price.
    pub price: Money,
}

// =============================================================================
// Catalog Item Trait
// =============================================================================

/// Common view over the three option types, used by [`crate::catalog::Catalog`].
pub trait CatalogItem {
    /// The axis this option belongs to.
    const AXIS: Axis;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn color(&self) -> &HexColor;

    /// Surcharge over the base price. Fabrics are included in the base.
    fn price(&self) -> Money {
        Money::zero()
    }
}

impl CatalogItem for FabricOption {
    const AXIS: Axis = Axis::Fabric;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> &HexColor {
        &self.color
    }
}

impl CatalogItem for StrapStyleOption {
    const AXIS: Axis = Axis::Strap;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> &HexColor {
        &self.color
    }

    fn price(&self) -> Money {
        self.price
    }
}

impl CatalogItem for StrapColorOption {
    const AXIS: Axis = Axis::StrapColor;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> &HexColor {
        &self.color
    }

    fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Hover Target
// =============================================================================

/// The item under pointer focus, used only for tooltips and highlights.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum HoverTarget {
    Fabric(String),
    Strap(String),
    StrapColor(String),
    /// The bag preview area on the right-hand side.
    Preview,
}

impl HoverTarget {
    /// Builds a target for a catalog option.
    pub fn option(axis: Axis, id: impl Into<String>) -> Self {
        match axis {
            Axis::Fabric => HoverTarget::Fabric(id.into()),
            Axis::Strap => HoverTarget::Strap(id.into()),
            Axis::StrapColor => HoverTarget::StrapColor(id.into()),
        }
    }

    /// The axis of the hovered option, `None` for the preview region.
    pub fn axis(&self) -> Option<Axis> {
        match self {
            HoverTarget::Fabric(_) => Some(Axis::Fabric),
            HoverTarget::Strap(_) => Some(Axis::Strap),
            HoverTarget::StrapColor(_) => Some(Axis::StrapColor),
            HoverTarget::Preview => None,
        }
    }

    /// The hovered option id, `None` for the preview region.
    pub fn id(&self) -> Option<&str> {
        match self {
            HoverTarget::Fabric(id) | HoverTarget::Strap(id) | HoverTarget::StrapColor(id) => {
                Some(id)
            }
            HoverTarget::Preview => None,
        }
    }
}

impl fmt::Display for HoverTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.axis(), self.id()) {
            (Some(axis), Some(id)) => write!(f, "{}:{}", axis, id),
            _ => write!(f, "preview"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parse() {
        let color = HexColor::parse("#DC2626").unwrap();
        assert_eq!(color.as_str(), "#dc2626");
        assert_eq!(color.rgb(), (0xdc, 0x26, 0x26));

        assert!(HexColor::parse("dc2626").is_err());
        assert!(HexColor::parse("#dc26").is_err());
        assert!(HexColor::parse("#zz2626").is_err());
    }

    #[test]
    fn test_hex_color_deserialize_validates() {
        let color: HexColor = serde_json::from_str("\"#6B7280\"").unwrap();
        assert_eq!(color.as_str(), "#6b7280");
        assert_eq!(serde_json::to_value(&color).unwrap(), "#6b7280");

        assert!(serde_json::from_str::<HexColor>("\"gray\"").is_err());
        assert!(serde_json::from_str::<StrapColorOption>(
            r##"{"id":"gray","name":"Gray","color":"#12","price":1100}"##
        )
        .is_err());
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Fabric.to_string(), "fabric");
        assert_eq!(Axis::Strap.to_string(), "strap");
        assert_eq!(Axis::StrapColor.to_string(), "strap color");
    }

    #[test]
    fn test_pattern_serializes_kebab_case() {
        let json = serde_json::to_string(&FabricPattern::CarbonFiber).unwrap();
        assert_eq!(json, "\"carbon-fiber\"");
    }

    #[test]
    fn test_hover_target_accessors() {
        let target = HoverTarget::option(Axis::StrapColor, "gray");
        assert_eq!(target, HoverTarget::StrapColor("gray".to_string()));
        assert_eq!(target.axis(), Some(Axis::StrapColor));
        assert_eq!(target.id(), Some("gray"));
        assert_eq!(target.to_string(), "strap color:gray");

        assert_eq!(HoverTarget::Preview.axis(), None);
        assert_eq!(HoverTarget::Preview.id(), None);
    }

    #[test]
    fn test_hover_target_json_shape() {
        let json = serde_json::to_string(&HoverTarget::Fabric("red-grid".into())).unwrap();
        assert_eq!(json, r#"{"kind":"fabric","id":"red-grid"}"#);
    }
}
