//! SQL applier
//!
//! Reads one migration file and executes its full text as a single
//! batch. Statement handling and transactionality belong to the
//! executor.

use crate::discover::MigrationFile;
use crate::error::{MigrateError, Result};
use crate::executor::Executor;

/// Executes the SQL content of migration files
pub struct Applier<'e, E: Executor> {
    exec: &'e E,
}

impl<'e, E: Executor> Applier<'e, E> {
    pub fn new(exec: &'e E) -> Self {
        Self { exec }
    }

    /// Read `file` fully and execute its SQL as one batch.
    ///
    /// A read problem and rejected SQL surface as distinct error kinds
    /// so operators can tell an unreadable file from a bad migration.
    pub fn apply(&self, file: &MigrationFile) -> Result<()> {
        let sql =
            std::fs::read_to_string(&file.path).map_err(|source| MigrateError::ReadFailed {
                path: file.path.clone(),
                source,
            })?;

        tracing::debug!(migration = %file.name, bytes = sql.len(), "executing migration");

        self.exec
            .execute_batch(&sql)
            .map_err(|source| MigrateError::ExecuteFailed {
                name: file.name.clone(),
                source,
            })
    }
}
