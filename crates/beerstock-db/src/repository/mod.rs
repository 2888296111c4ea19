//! # Repository Module
//!
//! Database repository implementation for the beerstock service.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Route handler                                                         │
//! │       │                                                                 │
//! │       │  db.beers().find_by_name("Skol Beats")                         │
//! │       ▼                                                                 │
//! │  BeerRepository                                                        │
//! │  ├── find_all(&self)                                                   │
//! │  ├── find_by_id(&self, id)                                             │
//! │  ├── find_by_name(&self, name)                                         │
//! │  ├── insert(&self, new_beer)                                           │
//! │  ├── update_quantity(&self, id, quantity, expected_version)            │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod beer;
