//! # Beerstock REST API
//!
//! HTTP server for the beer stock service.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         REST Endpoints                                  │
//! │                                                                         │
//! │  GET    /beers                   List all beers                        │
//! │  GET    /beers/{id}              Find a beer by id                     │
//! │  GET    /beers/search/{name}     Find a beer by name                   │
//! │  POST   /beers                   Register a new beer                   │
//! │  PATCH  /beers/{id}/increment    Add stock                             │
//! │  PATCH  /beers/{id}/decrement    Remove stock                          │
//! │  DELETE /beers/{id}              Remove a beer                         │
//! │  GET    /health                  Liveness check                        │
//! │                                                                         │
//! │  Request flow:                                                          │
//! │  handler (routes.rs) → BeerService (service.rs) → BeerRepository       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `DATABASE_PATH` - SQLite database file (default: ./beerstock.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod service;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ErrorCode};
pub use service::BeerService;

use beerstock_db::Database;

/// Shared application state.
///
/// Cloned per handler invocation; both members are cheap handles over the
/// same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub service: BeerService,
}

impl AppState {
    /// Creates application state around a connected database.
    pub fn new(db: Database) -> Self {
        AppState {
            service: BeerService::new(db.clone()),
            db,
        }
    }
}
