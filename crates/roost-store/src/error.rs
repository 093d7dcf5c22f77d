//! Error handling for roost-store

use roost_migrate::MigrateError;
use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures from the storage layer around the migration engine
#[derive(Debug, Error)]
pub enum StoreError {
    /// A configuration file was present but not valid TOML
    #[error("invalid config file {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error(transparent)]
    Migration(#[from] MigrateError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
