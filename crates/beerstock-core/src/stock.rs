//! # Stock Engine
//!
//! Pure stock arithmetic and the quantity bound invariant.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stock Update Flow                                  │
//! │                                                                         │
//! │  PATCH /beers/{id}/increment  {quantity: 3}                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Fetch record: quantity=2, max=5                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_stock_action(2, 3, Increment) → 5                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  check_stock_bounds(5, max=5)                                          │
//! │       │                                                                 │
//! │       ├── new quantity < 0?   → StockExceeded                          │
//! │       ├── new quantity > max? → StockExceeded                          │
//! │       └── OK (bound is inclusive: 5 == max passes)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Persist quantity=5, return updated record                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{BeerError, BeerResult};
use crate::types::StockAction;

/// Computes the quantity that results from applying a stock action.
///
/// The delta itself is validated at the request boundary
/// (see [`crate::validation::validate_stock_delta`]); this function only
/// does the signed arithmetic.
pub fn apply_stock_action(current: i64, delta: i64, action: StockAction) -> i64 {
    match action {
        StockAction::Increment => current + delta,
        StockAction::Decrement => current - delta,
    }
}

/// Checks the stock invariant `0 <= quantity <= max`.
///
/// The upper bound is inclusive: a quantity landing exactly on `max` is
/// valid. Fails with [`BeerError::StockExceeded`] carrying the record's
/// `max` so the caller can report the limit that was violated.
pub fn check_stock_bounds(quantity: i64, max: i64) -> BeerResult<()> {
    if quantity > max || quantity < 0 {
        return Err(BeerError::StockExceeded { max });
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
    fn test_apply_increment() {
        assert_eq!(apply_stock_action(2, 3, StockAction::Increment), 5);
        assert_eq!(apply_stock_action(0, 1, StockAction::Increment), 1);
    }

    #[test]
    fn test_apply_decrement() {
        assert_eq!(apply_stock_action(5, 3, StockAction::Decrement), 2);
        assert_eq!(apply_stock_action(1, 1, StockAction::Decrement), 0);
    }

    #[test]
    fn test_bounds_within_range() {
        assert!(check_stock_bounds(0, 5).is_ok());
        assert!(check_stock_bounds(3, 5).is_ok());
    }

    #[test]
    fn test_bounds_upper_is_inclusive() {
        // Landing exactly on max succeeds
        assert!(check_stock_bounds(5, 5).is_ok());
        assert_eq!(
            check_stock_bounds(6, 5),
            Err(BeerError::StockExceeded { max: 5 })
        );
    }

    #[test]
    fn test_bounds_negative_quantity() {
        assert_eq!(
            check_stock_bounds(-1, 5),
            Err(BeerError::StockExceeded { max: 5 })
        );
    }

    #[test]
    fn test_increment_then_check() {
        // quantity=2, max=5: +3 lands exactly on the bound and passes
        let updated = apply_stock_action(2, 3, StockAction::Increment);
        assert!(check_stock_bounds(updated, 5).is_ok());

        // +30 blows past the bound
        let updated = apply_stock_action(2, 30, StockAction::Increment);
        assert!(check_stock_bounds(updated, 5).is_err());
    }

    #[test]
    fn test_decrement_then_check() {
        // quantity=5, max=10: -3 leaves 2
        let updated = apply_stock_action(5, 3, StockAction::Decrement);
        assert_eq!(updated, 2);
        assert!(check_stock_bounds(updated, 10).is_ok());

        // -30 goes negative
        let updated = apply_stock_action(5, 30, StockAction::Decrement);
        assert!(check_stock_bounds(updated, 10).is_err());
    }
}
