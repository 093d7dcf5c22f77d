//! Store configuration
//!
//! Where the corpus database lives and where its migration files come
//! from. Values load from a TOML file or from `ROOST_*` environment
//! variables, with the environment taking precedence; a local `.env`
//! file is folded into the environment before it is read.

use crate::error::{Result, StoreError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_DB_PATH: &str = "ROOST_DB_PATH";
pub const ENV_MIGRATIONS_DIR: &str = "ROOST_MIGRATIONS_DIR";

/// Storage configuration for the corpus backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file; parent directories are created on open
    pub db_path: PathBuf,
    /// Directory holding `NNN_name.sql` migration files
    pub migrations_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(".roost/corpus.db"),
            migrations_dir: PathBuf::from("migrations"),
        }
    }
}

impl StoreConfig {
    /// Load from a TOML file, then apply environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut config: StoreConfig =
            toml::from_str(&raw).map_err(|source| StoreError::Config {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        config.apply_env();
        Ok(config)
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        // .env never overrides variables that are already set
        let _ = dotenvy::dotenv();
        if let Ok(v) = std::env::var(ENV_DB_PATH) {
            self.db_path = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var(ENV_MIGRATIONS_DIR) {
            self.migrations_dir = PathBuf::from(v);
        }
    }
}
