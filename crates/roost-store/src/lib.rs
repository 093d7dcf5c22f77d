//! roost-store - Corpus persistence layer over SQLite
//!
//! Provides:
//! - Connection management and pragmas for the corpus database
//! - The SQLite implementation of the migration engine's executor
//! - Store bootstrap that brings the schema up to date on every start
//! - Storage configuration from TOML files and `ROOST_*` variables
//! - Logging initialization for the embedding service
//!
//! The corpus schema itself ships as plain `.sql` files under
//! `migrations/`, applied by `roost-migrate` in file-name order.

pub mod config;
pub mod db;
pub mod error;
pub mod executor;
pub mod logging;
pub mod store;

// Re-export key types
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use executor::SqliteExecutor;
pub use store::Store;
