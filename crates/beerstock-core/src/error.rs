//! # Error Types
//!
//! Domain-specific error types for beerstock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  beerstock-core errors (this file)                                     │
//! │  ├── BeerError        - Business rule violations                       │
//! │  └── ValidationError  - Request-shape validation failures              │
//! │                                                                         │
//! │  beerstock-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  REST API errors (in app)                                              │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → BeerError → DbError → ApiError → Client       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, id, max)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a fixed HTTP status at the API boundary

use thiserror::Error;

// =============================================================================
// Beer Error
// =============================================================================

/// Business rule violations raised by the stock engine.
#[derive(Debug, Error, PartialEq)]
pub enum BeerError {
    /// No record matches the given lookup key.
    ///
    /// `attribute` names the key that missed ("id" or "name"); the two
    /// lookup operations each produce their own variant of this failure
    /// rather than branching on a runtime type.
    #[error("Beer not found with {attribute} {value}")]
    NotFound {
        attribute: &'static str,
        value: String,
    },

    /// A create request targets a name that is already present.
    #[error("Beer with name {name} already registered in the system")]
    AlreadyRegistered { name: String },

    /// The resulting or supplied quantity is negative or exceeds `max`.
    ///
    /// The bound is inclusive at the top: a quantity equal to `max` is
    /// valid, one past it is not.
    #[error("Quantity is less than 0 or stock exceeds max quantity of: {max}")]
    StockExceeded { max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl BeerError {
    /// NotFound for an id lookup miss.
    pub fn not_found_by_id(id: i64) -> Self {
        BeerError::NotFound {
            attribute: "id",
            value: id.to_string(),
        }
    }

    /// NotFound for a name lookup miss.
    pub fn not_found_by_name(name: impl Into<String>) -> Self {
        BeerError::NotFound {
            attribute: "name",
            value: name.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Request-shape validation errors.
///
/// These occur before the stock engine runs, when the supplied fields do
/// not meet basic requirements.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BeerError.
pub type BeerResult<T> = Result<T, BeerError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            BeerError::not_found_by_id(42).to_string(),
            "Beer not found with id 42"
        );
        assert_eq!(
            BeerError::not_found_by_name("Sol").to_string(),
            "Beer not found with name Sol"
        );
    }

    #[test]
    fn test_already_registered_message() {
        let err = BeerError::AlreadyRegistered {
            name: "Skol Beats".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Beer with name Skol Beats already registered in the system"
        );
    }

    #[test]
    fn test_stock_exceeded_message() {
        let err = BeerError::StockExceeded { max: 5 };
        assert_eq!(
            err.to_string(),
            "Quantity is less than 0 or stock exceeds max quantity of: 5"
        );
    }

    #[test]
    fn test_validation_converts_to_beer_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let beer_err: BeerError = validation_err.into();
        assert!(matches!(beer_err, BeerError::Validation(_)));
    }
}
