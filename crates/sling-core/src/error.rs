//! # Error Types
//!
//! Domain-specific error types for sling-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sling-core errors (this file)                                         │
//! │  ├── CoreError        - Selection / share link failures                │
//! │  └── ValidationError  - Catalog and value validation failures          │
//! │                                                                         │
//! │  sling-session errors (separate crate)                                 │
//! │  ├── SessionError     - Config loading, IO                             │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation layer     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (axis, id)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::Axis;

// =============================================================================
// Core Error
// =============================================================================

/// Core selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An id that is not part of the axis catalog.
    ///
    /// ## When This Occurs
    /// - The presentation layer passes a stale or foreign key
    /// - A share link references an option that no longer exists
    ///
    /// Catalogs are fixed, so with a correctly wired presentation layer this
    /// is unreachable. The attempted transition is aborted and the previous
    /// configuration stays in place.
    #[error("Invalid {axis} selection: '{id}' is not in the catalog")]
    InvalidSelection { axis: Axis, id: String },

    /// A share link that could not be decoded.
    #[error("Invalid share link: {0}")]
    InvalidShareLink(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidSelection`].
    pub fn invalid_selection(axis: Axis, id: impl Into<String>) -> Self {
        CoreError::InvalidSelection {
            axis,
            id: id.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog and value validation errors.
///
/// Raised while a catalog is being built, before any selection exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., a color that is not `#RRGGBB`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A catalog with no options.
    #[error("{axis} catalog must contain at least one option")]
    EmptyCatalog { axis: Axis },

    /// Two options in one catalog share an id.
    #[error("{axis} catalog contains duplicate id '{id}'")]
    DuplicateId { axis: Axis, id: String },

    /// Negative price.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// A price too large to add up into a total.
    #[error("{field} is too large: the total would overflow")]
    PriceOverflow { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::invalid_selection(Axis::Fabric, "plaid");
        assert_eq!(
            err.to_string(),
            "Invalid fabric selection: 'plaid' is not in the catalog"
        );

        let err = CoreError::invalid_selection(Axis::StrapColor, "teal");
        assert_eq!(
            err.to_string(),
            "Invalid strap color selection: 'teal' is not in the catalog"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::EmptyCatalog { axis: Axis::Strap };
        assert_eq!(err.to_string(), "strap catalog must contain at least one option");

        let err = ValidationError::DuplicateId {
            axis: Axis::Fabric,
            id: "red-grid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fabric catalog contains duplicate id 'red-grid'"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
