//! Database executor capability
//!
//! The engine never talks to a database driver directly. Everything it
//! needs is expressed through this trait, injected by the caller, so the
//! engine stays driver-free and the runner can be exercised against a
//! scripted fake in tests.

/// Error type carried across the executor boundary
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The slice of database capability the migration engine consumes.
///
/// Implementations own connection management, transactionality of a
/// batch, and dialect concerns. `roost-store` provides the SQLite
/// implementation.
pub trait Executor {
    /// Execute a SQL script as one batch. Used for whole migration
    /// files and for ledger/lease DDL.
    fn execute_batch(&self, sql: &str) -> std::result::Result<(), BoxError>;

    /// Execute a single parameterized statement, returning the number
    /// of rows it changed.
    fn execute(&self, sql: &str, params: &[&str]) -> std::result::Result<usize, BoxError>;

    /// Run a query expected to produce at most one scalar row.
    /// `None` means the query matched no row.
    fn query_scalar(
        &self,
        sql: &str,
        params: &[&str],
    ) -> std::result::Result<Option<i64>, BoxError>;
}
