//! # Beer Repository
//!
//! Database operations for beer records.
//!
//! ## Key Operations
//! - Lookup by id and by unique name
//! - Insert with store-assigned or caller-supplied id
//! - Conditional quantity update (version check)
//!
//! ## Conditional Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Quantity Update Strategy                              │
//! │                                                                         │
//! │  A plain read-modify-write loses updates under concurrency:            │
//! │                                                                         │
//! │    Request A: read quantity=2 ──┐                                       │
//! │    Request B: read quantity=2 ──┤ both write, one update vanishes      │
//! │                                                                         │
//! │  Instead the write is conditional on the version read:                 │
//! │                                                                         │
//! │    UPDATE beers SET quantity = ?, version = version + 1                │
//! │    WHERE id = ? AND version = ?                                        │
//! │                                                                         │
//! │  A stale version matches zero rows; the caller re-reads and retries.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use beerstock_core::{Beer, NewBeer};

/// Internal row mapping for the `beers` table.
///
/// Kept separate from the domain type so beerstock-core stays free of
/// sqlx derives.
#[derive(Debug, Clone, sqlx::FromRow)]
struct BeerRow {
    id: i64,
    name: String,
    brand: String,
    max: i64,
    quantity: i64,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BeerRow> for Beer {
    fn from(row: BeerRow) -> Self {
        Beer {
            id: row.id,
            name: row.name,
            brand: row.brand,
            max: row.max,
            quantity: row.quantity,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str = "id, name, brand, max, quantity, version, created_at, updated_at";

/// Repository for beer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BeerRepository::new(pool);
///
/// let all = repo.find_all().await?;
/// let beer = repo.find_by_id(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BeerRepository {
    pool: SqlitePool,
}

impl BeerRepository {
    /// Creates a new BeerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BeerRepository { pool }
    }

    /// Lists all beers, sorted by name.
    ///
    /// No filtering, no pagination. Returns an empty vector when the
    /// store is empty.
    pub async fn find_all(&self) -> DbResult<Vec<Beer>> {
        let rows = sqlx::query_as::<_, BeerRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM beers ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed beers");
        Ok(rows.into_iter().map(Beer::from).collect())
    }

    /// Gets a beer by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Beer))` - Beer found
    /// * `Ok(None)` - Beer not found
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Beer>> {
        let row = sqlx::query_as::<_, BeerRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM beers WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Beer::from))
    }

    /// Gets a beer by its exact name.
    ///
    /// ## Returns
    /// * `Ok(Some(Beer))` - Beer found
    /// * `Ok(None)` - Beer not found
    pub async fn find_by_name(&self, name: &str) -> DbResult<Option<Beer>> {
        let row = sqlx::query_as::<_, BeerRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM beers WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Beer::from))
    }

    /// Inserts a new beer.
    ///
    /// The store assigns the id unless the caller supplied one. The
    /// `name` column carries a UNIQUE index, so a duplicate name that
    /// slipped past the service-level check surfaces as
    /// `DbError::UniqueViolation`.
    ///
    /// ## Returns
    /// The persisted record with its assigned id and timestamps.
    pub async fn insert(&self, new_beer: &NewBeer) -> DbResult<Beer> {
        debug!(name = %new_beer.name, "Inserting beer");

        let now = Utc::now();

        let id = match new_beer.id {
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO beers (id, name, brand, max, quantity, version, created_at, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?6)
                    "#,
                )
                .bind(id)
                .bind(&new_beer.name)
                .bind(&new_beer.brand)
                .bind(new_beer.max)
                .bind(new_beer.quantity)
                .bind(now)
                .execute(&self.pool)
                .await?;
                id
            }
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO beers (name, brand, max, quantity, version, created_at, updated_at)
                    VALUES (?1, ?2, ?3, ?4, 0, ?5, ?5)
                    "#,
                )
                .bind(&new_beer.name)
                .bind(&new_beer.brand)
                .bind(new_beer.max)
                .bind(new_beer.quantity)
                .bind(now)
                .execute(&self.pool)
                .await?;
                result.last_insert_rowid()
            }
        };

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Beer", id.to_string()))
    }

    /// Updates a beer's quantity, conditional on the version the caller
    /// read.
    ///
    /// ## Returns
    /// * `Ok(Some(Beer))` - Update applied, returns the fresh record
    /// * `Ok(None)` - No row matched: the record was modified (or deleted)
    ///   since the caller read it. Re-read and retry.
    pub async fn update_quantity(
        &self,
        id: i64,
        quantity: i64,
        expected_version: i64,
    ) -> DbResult<Option<Beer>> {
        debug!(id, quantity, expected_version, "Updating beer quantity");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE beers
            SET quantity = ?2, version = version + 1, updated_at = ?3
            WHERE id = ?1 AND version = ?4
            "#,
        )
        .bind(id)
        .bind(quantity)
        .bind(now)
        .bind(expected_version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Deletes a beer by id.
    ///
    /// ## Returns
    /// * `Ok(())` - Delete successful
    /// * `Err(DbError::NotFound)` - Beer doesn't exist
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting beer");

        let result = sqlx::query("DELETE FROM beers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Beer", id.to_string()));
        }

        Ok(())
    }

    /// Counts total beers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM beers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
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
    async fn test_insert_assigns_id() {
        let db = test_db().await;
        let beer = db.beers().insert(&skol()).await.unwrap();

        assert!(beer.id > 0);
        assert_eq!(beer.name, "Skol Beats");
        assert_eq!(beer.brand, "Ambev");
        assert_eq!(beer.max, 5);
        assert_eq!(beer.quantity, 2);
        assert_eq!(beer.version, 0);
    }

    #[tokio::test]
    async fn test_insert_honors_explicit_id() {
        let db = test_db().await;
        let mut new_beer = skol();
        new_beer.id = Some(42);

        let beer = db.beers().insert(&new_beer).await.unwrap();
        assert_eq!(beer.id, 42);
    }

    #[tokio::test]
    async fn test_insert_duplicate_name_hits_unique_index() {
        let db = test_db().await;
        db.beers().insert(&skol()).await.unwrap();

        let err = db.beers().insert(&skol()).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_find_by_id_round_trip() {
        let db = test_db().await;
        let inserted = db.beers().insert(&skol()).await.unwrap();

        let fetched = db.beers().find_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched, inserted);
    }

    #[tokio::test]
    async fn test_find_by_id_miss() {
        let db = test_db().await;
        assert!(db.beers().find_by_id(0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let db = test_db().await;
        db.beers().insert(&skol()).await.unwrap();

        let found = db.beers().find_by_name("Skol Beats").await.unwrap();
        assert!(found.is_some());

        let missing = db.beers().find_by_name("Sol").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_name() {
        let db = test_db().await;
        db.beers().insert(&skol()).await.unwrap();
        db.beers()
            .insert(&NewBeer {
                id: None,
                name: "Brahma".to_string(),
                brand: "Ambev".to_string(),
                max: 10,
                quantity: 5,
            })
            .await
            .unwrap();

        let all = db.beers().find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Brahma");
        assert_eq!(all[1].name, "Skol Beats");
    }

    #[tokio::test]
    async fn test_update_quantity_bumps_version() {
        let db = test_db().await;
        let beer = db.beers().insert(&skol()).await.unwrap();

        let updated = db
            .beers()
            .update_quantity(beer.id, 5, beer.version)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.quantity, 5);
        assert_eq!(updated.version, beer.version + 1);
    }

    #[tokio::test]
    async fn test_update_quantity_stale_version_is_noop() {
        let db = test_db().await;
        let beer = db.beers().insert(&skol()).await.unwrap();

        // First write wins
        db.beers()
            .update_quantity(beer.id, 5, beer.version)
            .await
            .unwrap()
            .unwrap();

        // Second write with the stale version matches nothing
        let result = db
            .beers()
            .update_quantity(beer.id, 3, beer.version)
            .await
            .unwrap();
        assert!(result.is_none());

        // And the record still holds the first write
        let current = db.beers().find_by_id(beer.id).await.unwrap().unwrap();
        assert_eq!(current.quantity, 5);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let beer = db.beers().insert(&skol()).await.unwrap();

        db.beers().delete(beer.id).await.unwrap();
        assert!(db.beers().find_by_id(beer.id).await.unwrap().is_none());

        let err = db.beers().delete(beer.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_count() {
        let db = test_db().await;
        assert_eq!(db.beers().count().await.unwrap(), 0);

        db.beers().insert(&skol()).await.unwrap();
        assert_eq!(db.beers().count().await.unwrap(), 1);
    }
}
