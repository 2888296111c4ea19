//! # Beer Service
//!
//! The validation & stock engine: business rules wrapping the repository.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BeerService                                      │
//! │                                                                         │
//! │  find_all     ──► repository, no rules                                 │
//! │  find_by_id   ──► NotFound if absent                                   │
//! │  find_by_name ──► NotFound if absent                                   │
//! │  create       ──► AlreadyRegistered on duplicate name                  │
//! │                   StockExceeded if quantity outside [0, max]           │
//! │  update_stock ──► NotFound if absent                                   │
//! │                   StockExceeded if result outside [0, max]             │
//! │                   conditional write + bounded retry (version race)     │
//! │  delete       ──► NotFound if absent                                   │
//! │                                                                         │
//! │  Every failure is terminal for the current request and maps to a       │
//! │  fixed HTTP status at the error boundary.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use beerstock_core::stock::{apply_stock_action, check_stock_bounds};
use beerstock_core::{Beer, BeerError, NewBeer, StockAction};
use beerstock_db::Database;

use crate::dto::MessageResponse;
use crate::error::ApiError;

/// How many times a stock update re-reads and retries after losing the
/// version race before giving up with a conflict.
const MAX_UPDATE_ATTEMPTS: u32 = 3;

/// Business logic for beer stock management.
///
/// Stateless aside from the database handle; cheap to clone.
#[derive(Debug, Clone)]
pub struct BeerService {
    db: Database,
}

impl BeerService {
    /// Creates a new BeerService.
    pub fn new(db: Database) -> Self {
        BeerService { db }
    }

    /// Lists all registered beers.
    ///
    /// Always succeeds; an empty store yields an empty list.
    pub async fn find_all(&self) -> Result<Vec<Beer>, ApiError> {
        let beers = self.db.beers().find_all().await?;
        Ok(beers)
    }

    /// Finds a beer by its id.
    pub async fn find_by_id(&self, id: i64) -> Result<Beer, ApiError> {
        self.db
            .beers()
            .find_by_id(id)
            .await?
            .ok_or_else(|| BeerError::not_found_by_id(id).into())
    }

    /// Finds a beer by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Beer, ApiError> {
        self.db
            .beers()
            .find_by_name(name)
            .await?
            .ok_or_else(|| BeerError::not_found_by_name(name).into())
    }

    /// Registers a new beer.
    ///
    /// ## Rules
    /// 1. The name must not already be registered
    /// 2. The supplied quantity must satisfy `0 <= quantity <= max`
    ///
    /// The store assigns the id unless the caller supplied one.
    pub async fn create(&self, new_beer: NewBeer) -> Result<Beer, ApiError> {
        if self
            .db
            .beers()
            .find_by_name(&new_beer.name)
            .await?
            .is_some()
        {
            return Err(BeerError::AlreadyRegistered {
                name: new_beer.name,
            }
            .into());
        }

        check_stock_bounds(new_beer.quantity, new_beer.max)?;

        let beer = self.db.beers().insert(&new_beer).await?;
        info!(id = beer.id, name = %beer.name, "Beer registered");
        Ok(beer)
    }

    /// Increments or decrements a beer's stock.
    ///
    /// Fetches the record, computes the new quantity, re-checks the
    /// `0 <= quantity <= max` invariant and writes back conditionally on
    /// the version it read. A lost version race re-reads fresh state and
    /// revalidates; the record is never changed when the bound check
    /// fails.
    ///
    /// The delta itself was validated at the request boundary; only the
    /// resulting quantity is checked here.
    pub async fn update_stock(
        &self,
        id: i64,
        delta: i64,
        action: StockAction,
    ) -> Result<Beer, ApiError> {
        for attempt in 0..MAX_UPDATE_ATTEMPTS {
            let beer = self.find_by_id(id).await?;

            let updated_quantity = apply_stock_action(beer.quantity, delta, action);
            check_stock_bounds(updated_quantity, beer.max)?;

            match self
                .db
                .beers()
                .update_quantity(id, updated_quantity, beer.version)
                .await?
            {
                Some(saved) => {
                    info!(
                        id,
                        quantity = saved.quantity,
                        ?action,
                        "Stock updated"
                    );
                    return Ok(saved);
                }
                None => {
                    debug!(id, attempt, "Stock update lost version race, retrying");
                }
            }
        }

        Err(ApiError::conflict(id))
    }

    /// Deletes a beer by id.
    ///
    /// ## Returns
    /// A confirmation message naming the deleted id.
    pub async fn delete(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.find_by_id(id).await?;
        self.db.beers().delete(id).await?;

        info!(id, "Beer deleted");
        Ok(MessageResponse {
            message: format!("Deleted beer with id {}", id),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use beerstock_db::DbConfig;

    async fn service() -> BeerService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        BeerService::new(db)
    }

    fn skol() -> NewBeer {
        NewBeer {
            id: None,
            name: "Skol Beats".to_string(),
            brand: "Ambev".to_string(),
            max: 5,
            quantity: 2,
        }
    }

    #[tokio::test]
    async fn test_create_echoes_fields_with_assigned_id() {
        let svc = service().await;
        let beer = svc.create(skol()).await.unwrap();

        assert!(beer.id > 0);
        assert_eq!(beer.name, "Skol Beats");
        assert_eq!(beer.brand, "Ambev");
        assert_eq!(beer.max, 5);
        assert_eq!(beer.quantity, 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_rejected() {
        let svc = service().await;
        svc.create(skol()).await.unwrap();

        // Same name, different other fields: still rejected
        let mut duplicate = skol();
        duplicate.brand = "Someone Else".to_string();
        duplicate.max = 50;
        duplicate.quantity = 0;

        let err = svc.create(duplicate).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyRegistered);
        assert_eq!(
            err.message,
            "Beer with name Skol Beats already registered in the system"
        );
    }

    #[tokio::test]
    async fn test_create_quantity_out_of_bounds_rejected() {
        let svc = service().await;

        let mut over = skol();
        over.quantity = 6;
        let err = svc.create(over).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StockExceeded);

        let mut negative = skol();
        negative.quantity = -1;
        let err = svc.create(negative).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StockExceeded);
    }

    #[tokio::test]
    async fn test_create_then_find_round_trip() {
        let svc = service().await;
        let created = svc.create(skol()).await.unwrap();

        let fetched = svc.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);

        let by_name = svc.find_by_name("Skol Beats").await.unwrap();
        assert_eq!(by_name, created);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let svc = service().await;
        let err = svc.find_by_id(0).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Beer not found with id 0");
    }

    #[tokio::test]
    async fn test_find_by_name_missing() {
        let svc = service().await;
        let err = svc.find_by_name("Sol").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Beer not found with name Sol");
    }

    #[tokio::test]
    async fn test_find_all() {
        let svc = service().await;
        assert!(svc.find_all().await.unwrap().is_empty());

        svc.create(skol()).await.unwrap();
        svc.create(NewBeer {
            id: None,
            name: "Brahma".to_string(),
            brand: "Ambev".to_string(),
            max: 10,
            quantity: 5,
        })
        .await
        .unwrap();

        assert_eq!(svc.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_increment_lands_exactly_on_max() {
        let svc = service().await;
        let beer = svc.create(skol()).await.unwrap();

        // quantity=2, max=5: +3 lands on the inclusive bound
        let updated = svc
            .update_stock(beer.id, 3, StockAction::Increment)
            .await
            .unwrap();
        assert_eq!(updated.quantity, 5);
    }

    #[tokio::test]
    async fn test_increment_past_max_leaves_record_unchanged() {
        let svc = service().await;
        let beer = svc.create(skol()).await.unwrap();

        let err = svc
            .update_stock(beer.id, 30, StockAction::Increment)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StockExceeded);
        assert_eq!(
            err.message,
            "Quantity is less than 0 or stock exceeds max quantity of: 5"
        );

        // Post-condition: the record is unchanged
        let current = svc.find_by_id(beer.id).await.unwrap();
        assert_eq!(current.quantity, 2);
    }

    #[tokio::test]
    async fn test_decrement() {
        let svc = service().await;
        let beer = svc
            .create(NewBeer {
                id: None,
                name: "Brahma".to_string(),
                brand: "Ambev".to_string(),
                max: 10,
                quantity: 5,
            })
            .await
            .unwrap();

        let updated = svc
            .update_stock(beer.id, 3, StockAction::Decrement)
            .await
            .unwrap();
        assert_eq!(updated.quantity, 2);
    }

    #[tokio::test]
    async fn test_decrement_below_zero_rejected() {
        let svc = service().await;
        let beer = svc.create(skol()).await.unwrap();

        let err = svc
            .update_stock(beer.id, 3, StockAction::Decrement)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StockExceeded);

        let current = svc.find_by_id(beer.id).await.unwrap();
        assert_eq!(current.quantity, 2);
    }

    #[tokio::test]
    async fn test_update_stock_missing_beer() {
        let svc = service().await;
        let err = svc
            .update_stock(0, 1, StockAction::Increment)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_update_stock_survives_version_race() {
        let svc = service().await;
        let beer = svc.create(skol()).await.unwrap();

        // Bump the version behind the engine's back; the retry loop
        // re-reads and still lands the update
        svc.db
            .beers()
            .update_quantity(beer.id, 3, beer.version)
            .await
            .unwrap()
            .unwrap();

        let updated = svc
            .update_stock(beer.id, 1, StockAction::Increment)
            .await
            .unwrap();
        assert_eq!(updated.quantity, 4);
    }

    #[tokio::test]
    async fn test_delete_then_find_missing() {
        let svc = service().await;
        let beer = svc.create(skol()).await.unwrap();

        let response = svc.delete(beer.id).await.unwrap();
        assert_eq!(
            response.message,
            format!("Deleted beer with id {}", beer.id)
        );

        let err = svc.find_by_id(beer.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete_missing_beer() {
        let svc = service().await;
        let err = svc.delete(0).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
