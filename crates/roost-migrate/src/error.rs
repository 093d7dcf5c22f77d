//! Error types for the migration engine
//!
//! One variant per failure kind, so callers and operators can tell an
//! unreadable file from rejected SQL from a ledger problem.

use crate::executor::BoxError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using MigrateError
pub type Result<T> = std::result::Result<T, MigrateError>;

/// Failure kinds surfaced by the migration runner.
///
/// Every variant is fatal to the run in progress: the runner stops at
/// the first error and re-running after the cause is fixed resumes from
/// the first unapplied migration.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// The ledger table could not be created or reached
    #[error("migration ledger is unavailable: {source}")]
    LedgerUnavailable { source: BoxError },

    /// The applied-check query itself failed (a missing row is not an
    /// error, it just means "not applied")
    #[error("could not check whether migration {name} is applied: {source}")]
    LookupFailed { name: String, source: BoxError },

    /// The migration file exists in the listing but could not be read
    #[error("could not read migration file {}: {}", .path.display(), .source)]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database rejected the migration's SQL; nothing was recorded
    /// and the file will be retried on the next run
    #[error("migration {name} failed to execute: {source}")]
    ExecuteFailed { name: String, source: BoxError },

    /// The SQL ran but the ledger insert failed, leaving the database
    /// ahead of the ledger
    #[error(
        "migration {name} executed but could not be recorded; \
         manual reconciliation required: {source}"
    )]
    RecordFailed { name: String, source: BoxError },

    /// Another live runner holds the advisory lease
    #[error("migration runner lock is held by another process")]
    LockHeld,

    /// The lease row itself could not be managed
    #[error("migration runner lock could not be managed: {source}")]
    LockUnavailable { source: BoxError },
}
