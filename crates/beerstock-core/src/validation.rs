//! # Validation Module
//!
//! Request-shape validation for the beerstock service.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Missing required fields rejected                                  │
//! │  └── Wrong types rejected                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (request shape)                                  │
//! │  ├── Empty name/brand, non-positive max                                │
//! │  └── Stock delta outside [1, 100]                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stock engine (business rules)                                │
//! │  ├── Duplicate name                                                    │
//! │  └── Quantity bound 0 <= q <= max                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Database (UNIQUE index backstop)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_BRAND_LENGTH, MAX_NAME_LENGTH, MAX_STOCK_DELTA};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a beer name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a brand name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_brand(brand: &str) -> ValidationResult<()> {
    let brand = brand.trim();

    if brand.is_empty() {
        return Err(ValidationError::Required { field: "brand" });
    }

    if brand.len() > MAX_BRAND_LENGTH {
        return Err(ValidationError::TooLong {
            field: "brand",
            max: MAX_BRAND_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the stock limit supplied at creation.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_max(max: i64) -> ValidationResult<()> {
    if max <= 0 {
        return Err(ValidationError::MustBePositive { field: "max" });
    }

    Ok(())
}

/// Validates the quantity carried by an increment/decrement request.
///
/// ## Rules
/// - Must be between 1 and 100
///
/// The stock engine never sees an out-of-range delta; it only checks the
/// resulting quantity against the record's own `max`.
pub fn validate_stock_delta(delta: i64) -> ValidationResult<()> {
    if delta < 1 || delta > MAX_STOCK_DELTA {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 1,
            max: MAX_STOCK_DELTA,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Skol Beats").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_brand() {
        assert!(validate_brand("Ambev").is_ok());
        assert!(validate_brand("").is_err());
        assert!(validate_brand(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_max() {
        assert!(validate_max(1).is_ok());
        assert!(validate_max(500).is_ok());

        assert!(validate_max(0).is_err());
        assert!(validate_max(-5).is_err());
    }

    #[test]
    fn test_validate_stock_delta() {
        assert!(validate_stock_delta(1).is_ok());
        assert!(validate_stock_delta(30).is_ok());
        assert!(validate_stock_delta(100).is_ok());

        assert!(validate_stock_delta(0).is_err());
        assert!(validate_stock_delta(-1).is_err());
        assert!(validate_stock_delta(101).is_err());
    }
}
