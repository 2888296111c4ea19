//! # Domain Types
//!
//! Core domain types for the beerstock service.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Beer       │   │    NewBeer      │   │   StockAction   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (optional)  │   │  Increment      │       │
//! │  │  name (unique)  │   │  name           │   │  Decrement      │       │
//! │  │  brand          │   │  brand          │   └─────────────────┘       │
//! │  │  max            │   │  max            │                             │
//! │  │  quantity       │   │  quantity       │                             │
//! │  │  version        │   └─────────────────┘                             │
//! │  │  created_at     │                                                   │
//! │  │  updated_at     │    Beer = persisted record                        │
//! │  └─────────────────┘    NewBeer = record as supplied on create         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! `0 <= quantity <= max` holds for every persisted record. Mutations go
//! through the stock engine which re-checks the bound before every write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Beer
// =============================================================================

/// A beer record as persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    /// Unique identifier, assigned by the store on creation. Immutable.
    pub id: i64,

    /// Display name. Unique across all records.
    pub name: String,

    /// Brand name. Descriptive only.
    pub brand: String,

    /// Upper bound for `quantity`. Fixed at creation.
    pub max: i64,

    /// Current stock level. `0 <= quantity <= max`.
    pub quantity: i64,

    /// Per-record write counter, incremented on every quantity update.
    /// Used for atomic conditional updates.
    pub version: i64,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Beer {
    /// Remaining capacity before the stock limit is reached.
    pub fn remaining_capacity(&self) -> i64 {
        self.max - self.quantity
    }
}

// =============================================================================
// NewBeer
// =============================================================================

/// A beer record as supplied by the caller on creation.
///
/// The store assigns `id` when it is not supplied; an explicit id is
/// honored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBeer {
    /// Optional explicit identifier.
    pub id: Option<i64>,
    pub name: String,
    pub brand: String,
    pub max: i64,
    pub quantity: i64,
}

// =============================================================================
// StockAction
// =============================================================================

/// The two supported stock mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAction {
    /// Add the requested quantity to the current stock.
    Increment,
    /// Remove the requested quantity from the current stock.
    Decrement,
}

// =============================================================================
// Unit Tests
// =============================================================================
