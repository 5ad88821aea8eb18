//! # surfsup-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `surfsup-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the `station` and `measurement` tables when absent
//!   (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `surfsup-app` (for port traits) and `surfsup-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod measurement_repo;
pub mod pool;
pub mod station_repo;

pub use error::StorageError;
pub use measurement_repo::SqliteMeasurementRepository;
pub use pool::{Config, Database};
pub use station_repo::SqliteStationRepository;
