//! # Validation Module
//!
//! Checks that catalog data is well formed before a catalog is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction (THIS MODULE)                           │
//! │  ├── ids / names present                                               │
//! │  ├── colors are #RRGGBB                                                │
//! │  ├── prices non-negative                                               │
//! │  └── catalog non-empty, ids unique                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Selection (selection.rs)                                     │
//! │  └── id must be in the catalog → CoreError::InvalidSelection           │
//! │                                                                         │
//! │  Once a catalog passes layer 1 it is never revalidated.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::catalog::Catalogs;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Axis, CatalogItem, HexColor};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted option id.
pub const MAX_ID_LEN: usize = 64;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an option id.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_ID_LEN`] characters
/// - Lowercase letters, digits and hyphens only
///
/// ## Example
/// ```rust
/// use sling_core::validation::validate_option_id;
///
/// assert!(validate_option_id("red-grid").is_ok());
/// assert!(validate_option_id("").is_err());
/// assert!(validate_option_id("Red Grid").is_err());
/// ```
pub fn validate_option_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: format!("must be at most {} characters", MAX_ID_LEN),
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only lowercase letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name.
pub fn validate_option_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates an option surcharge.
///
/// Zero is allowed (free options).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Re-checks a color that may have come from deserialized data.
pub fn validate_color(color: &HexColor) -> ValidationResult<()> {
    HexColor::parse(color.as_str()).map(|_| ())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a whole option list for one axis.
///
/// ## Rules
/// - At least one option
/// - Every id / name / color / price valid
/// - Ids unique within the axis
pub fn validate_catalog<T: CatalogItem>(options: &[T]) -> ValidationResult<()> {
    if options.is_empty() {
        return Err(ValidationError::EmptyCatalog { axis: T::AXIS });
    }

    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        validate_option_id(option.id())?;
        validate_option_name(option.name())?;
        validate_color(option.color())?;
        validate_price(option.price())?;

        if !seen.insert(option.id()) {
            return Err(duplicate(T::AXIS, option.id()));
        }
    }

    Ok(())
}

/// Checks that the priciest strap and strap color add up without overflow.
pub fn validate_surcharges(catalogs: &Catalogs) -> ValidationResult<()> {
    catalogs
        .max_surcharge()
        .map(|_| ())
        .ok_or_else(|| ValidationError::PriceOverflow {
            field: "surcharge".to_string(),
        })
}

/// Validates a base price against the catalogs it will be summed with.
///
/// ## Rules
/// - Not negative
/// - `base + max strap + max strap color` fits in an `i64`
pub fn validate_base_price(base: Money, catalogs: &Catalogs) -> ValidationResult<()> {
    if base.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "base_price".to_string(),
        });
    }

    catalogs
        .max_surcharge()
        .and_then(|surcharge| base.checked_add(surcharge))
        .map(|_| ())
        .ok_or_else(|| ValidationError::PriceOverflow {
            field: "base_price".to_string(),
        })
}

fn duplicate(axis: Axis, id: &str) -> ValidationError {
    ValidationError::DuplicateId {
        axis,
        id: id.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
