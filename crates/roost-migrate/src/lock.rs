//! Advisory runner lease
//!
//! Serializes concurrently booting replicas through a single-row lease
//! table so only one migration runner works on a database at a time.
//! A lease expires after its ttl, so a crashed holder does not wedge
//! the next deployment. Timestamps are fixed-width RFC 3339 UTC
//! strings, which keeps the expiry comparison a plain string compare
//! inside the database.

use crate::error::{MigrateError, Result};
use crate::executor::Executor;
use chrono::{SecondsFormat, Utc};
use std::time::Duration;
use uuid::Uuid;

const CREATE_LOCK_TABLE: &str = "CREATE TABLE IF NOT EXISTS schema_migrations_lock (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    owner TEXT NOT NULL,
    acquired_at TEXT NOT NULL,
    expires_at TEXT NOT NULL
)";

// Takes the lease when the row is absent, expired, or already ours.
const ACQUIRE: &str = "INSERT INTO schema_migrations_lock (id, owner, acquired_at, expires_at)
VALUES (1, ?1, ?2, ?3)
ON CONFLICT(id) DO UPDATE SET
    owner = excluded.owner,
    acquired_at = excluded.acquired_at,
    expires_at = excluded.expires_at
WHERE schema_migrations_lock.owner = excluded.owner
   OR schema_migrations_lock.expires_at <= excluded.acquired_at";

const RELEASE: &str = "DELETE FROM schema_migrations_lock WHERE id = 1 AND owner = ?1";

/// Options for taking the runner lease
#[derive(Debug, Clone)]
pub struct LockOptions {
    /// Identity recorded as the lease holder
    pub owner: String,
    /// How long the lease stays valid if never released
    pub ttl: Duration,
}

impl Default for LockOptions {
    fn default() -> Self {
        Self {
            owner: Uuid::new_v4().to_string(),
            ttl: Duration::from_secs(300),
        }
    }
}

/// A held lease.
///
/// Dropping without [`release`](Self::release) leaves the row in place
/// until the ttl expires; the next acquire after that steals it.
#[derive(Debug)]
pub struct RunnerLock<'e, E: Executor> {
    exec: &'e E,
    owner: String,
}

impl<'e, E: Executor> RunnerLock<'e, E> {
    /// Take the lease for `opts.owner`.
    ///
    /// Succeeds when no lease exists, the existing lease has expired,
    /// or the existing lease already belongs to this owner. A live
    /// lease held by someone else yields [`MigrateError::LockHeld`].
    pub fn acquire(exec: &'e E, opts: &LockOptions) -> Result<Self> {
        exec.execute_batch(CREATE_LOCK_TABLE)
            .map_err(|source| MigrateError::LockUnavailable { source })?;

        let ttl = chrono::Duration::from_std(opts.ttl)
            .map_err(|e| MigrateError::LockUnavailable { source: Box::new(e) })?;
        let now = Utc::now();
        let acquired_at = now.to_rfc3339_opts(SecondsFormat::Secs, true);
        let expires_at = (now + ttl).to_rfc3339_opts(SecondsFormat::Secs, true);

        let changed = exec
            .execute(
                ACQUIRE,
                &[opts.owner.as_str(), acquired_at.as_str(), expires_at.as_str()],
            )
            .map_err(|source| MigrateError::LockUnavailable { source })?;

        if changed == 0 {
            return Err(MigrateError::LockHeld);
        }

        tracing::debug!(owner = %opts.owner, %expires_at, "acquired migration runner lease");

        Ok(Self {
            exec,
            owner: opts.owner.clone(),
        })
    }

    /// Give the lease back so the next runner can take it immediately.
    pub fn release(self) -> Result<()> {
        self.exec
            .execute(RELEASE, &[self.owner.as_str()])
            .map(|_| ())
            .map_err(|source| MigrateError::LockUnavailable { source })
    }
}
