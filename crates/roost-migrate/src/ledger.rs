//! Applied-migration ledger
//!
//! Provides:
//! - Idempotent creation of the `schema_migrations` table
//! - Applied checks by migration name
//! - Recording a migration once its SQL has run
//!
//! The ledger is append-only from the engine's point of view: rows are
//! never updated or deleted here.

use crate::error::{MigrateError, Result};
use crate::executor::Executor;

const CREATE_LEDGER: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Tracks which migrations have been applied.
///
/// The only component allowed to write the ledger; the runner goes
/// through it for every check and record.
pub struct Ledger<'e, E: Executor> {
    exec: &'e E,
}

impl<'e, E: Executor> Ledger<'e, E> {
    pub fn new(exec: &'e E) -> Self {
        Self { exec }
    }

    /// Create the ledger table if it does not exist. Safe to call on
    /// every startup.
    pub fn ensure(&self) -> Result<()> {
        self.exec
            .execute_batch(CREATE_LEDGER)
            .map_err(|source| MigrateError::LedgerUnavailable { source })
    }

    /// Whether `name` is recorded as applied. A missing row means
    /// `false`; only a failing query is an error.
    pub fn is_applied(&self, name: &str) -> Result<bool> {
        self.exec
            .query_scalar("SELECT 1 FROM schema_migrations WHERE name = ?1", &[name])
            .map(|row| row.is_some())
            .map_err(|source| MigrateError::LookupFailed {
                name: name.to_string(),
                source,
            })
    }

    /// Record `name` as applied. Called exactly once per migration,
    /// after its SQL executed without error; `applied_at` is assigned
    /// by the database at insert time.
    pub fn record(&self, name: &str) -> Result<()> {
        self.exec
            .execute("INSERT INTO schema_migrations (name) VALUES (?1)", &[name])
            .map(|_| ())
            .map_err(|source| MigrateError::RecordFailed {
                name: name.to_string(),
                source,
            })
    }
}
