//! Migration runner
//!
//! Orchestrates the discoverer, the ledger, and the applier. Pending
//! migrations run in ascending file-name order and the run stops at
//! the first failure.

use crate::apply::Applier;
use crate::discover::discover;
use crate::error::Result;
use crate::executor::Executor;
use crate::ledger::Ledger;
use crate::lock::{LockOptions, RunnerLock};
use std::path::Path;

/// Applies pending migrations from a directory.
///
/// Safe to invoke on every process start: applied migrations are
/// skipped by ledger lookup, never re-executed.
pub struct Runner<'e, E: Executor> {
    exec: &'e E,
    ledger: Ledger<'e, E>,
    applier: Applier<'e, E>,
}

impl<'e, E: Executor> Runner<'e, E> {
    pub fn new(exec: &'e E) -> Self {
        Self {
            exec,
            ledger: Ledger::new(exec),
            applier: Applier::new(exec),
        }
    }

    /// Apply every pending migration in `migrations_dir`.
    ///
    /// Each file is checked against the ledger and skipped when already
    /// applied; otherwise its SQL runs and the ledger records it. The
    /// first failure aborts the run with that file's error; migrations
    /// applied before it stay applied and recorded, so a re-run after
    /// the cause is fixed resumes exactly where this one stopped.
    pub fn run<P: AsRef<Path>>(&self, migrations_dir: P) -> Result<()> {
        self.ledger.ensure()?;

        let files = discover(&migrations_dir);
        let total = files.len();
        let mut applied = 0usize;
        let mut skipped = 0usize;

        for file in &files {
            if self.ledger.is_applied(&file.name)? {
                tracing::debug!(migration = %file.name, "already applied, skipping");
                skipped += 1;
                continue;
            }

            self.applier.apply(file)?;
            self.ledger.record(&file.name)?;
            tracing::info!(migration = %file.name, "applied migration");
            applied += 1;
        }

        tracing::info!(total, applied, skipped, "migrations up to date");
        Ok(())
    }

    /// Like [`run`](Self::run), but wrapped in the advisory lease so
    /// concurrently booting replicas take turns instead of racing on
    /// the ledger. The run's error wins over a release error.
    pub fn run_locked<P: AsRef<Path>>(
        &self,
        migrations_dir: P,
        opts: &LockOptions,
    ) -> Result<()> {
        let lock = RunnerLock::acquire(self.exec, opts)?;
        let outcome = self.run(migrations_dir);
        let released = lock.release();
        outcome.and(released)
    }
}
