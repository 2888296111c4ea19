//! # beerstock-core: Pure Business Logic for Beerstock
//!
//! This crate is the **heart** of the beerstock service. It contains the
//! stock engine and validation rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Beerstock Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Clients                                 │   │
//! │  │    GET /beers ── POST /beers ── PATCH /beers/{id}/increment    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/rest-api (Axum)                         │   │
//! │  │    Route handlers, DTOs, BeerService orchestration             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ beerstock-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   stock   │  │ validation│  │   error   │  │   │
//! │  │   │   Beer    │  │  bounds   │  │   rules   │  │ BeerError │  │   │
//! │  │   │ StockAction│ │  checks   │  │  checks   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    beerstock-db (Database Layer)                │   │
//! │  │              SQLite queries, migrations, BeerRepository         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Beer, NewBeer, StockAction)
//! - [`stock`] - Stock arithmetic and the quantity bound invariant
//! - [`error`] - Domain error types
//! - [`validation`] - Request-shape validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use beerstock_core::Beer` instead of
// `use beerstock_core::types::Beer`

pub use error::{BeerError, BeerResult, ValidationError};
pub use types::{Beer, NewBeer, StockAction};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity a single increment/decrement request may carry.
///
/// Enforced at the request boundary, not inside the stock engine - the
/// engine only checks the resulting quantity against the record's own max.
pub const MAX_STOCK_DELTA: i64 = 100;

/// Maximum length of a beer name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a brand name.
pub const MAX_BRAND_LENGTH: usize = 100;
