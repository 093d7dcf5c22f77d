//! Store bootstrap
//!
//! Opens the corpus database and brings its schema up to date before
//! handing the connection to the application.

use crate::config::StoreConfig;
use crate::db;
use crate::error::Result;
use crate::executor::SqliteExecutor;
use roost_migrate::{LockOptions, Runner};
use rusqlite::Connection;
use std::path::Path;

/// An open, fully migrated corpus database
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database named by `config`, creating parent directories
    /// as needed, and apply pending migrations from
    /// `config.migrations_dir`. Safe to call on every process start.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        tracing::info!(db = %config.db_path.display(), "opening corpus store");
        ensure_parent_dir(&config.db_path)?;

        let conn = db::open(&config.db_path)?;
        db::configure(&conn)?;
        migrate(&conn, &config.migrations_dir)?;

        Ok(Self { conn })
    }

    /// Like [`open`](Self::open), but holds the advisory runner lease
    /// across the migration pass so concurrently booting replicas take
    /// turns.
    pub fn open_locked(config: &StoreConfig, opts: &LockOptions) -> Result<Self> {
        tracing::info!(db = %config.db_path.display(), "opening corpus store (locked)");
        ensure_parent_dir(&config.db_path)?;

        let conn = db::open(&config.db_path)?;
        db::configure(&conn)?;
        migrate_locked(&conn, &config.migrations_dir, opts)?;

        Ok(Self { conn })
    }

    /// In-memory store migrated from `migrations_dir` (for testing)
    pub fn open_in_memory<P: AsRef<Path>>(migrations_dir: P) -> Result<Self> {
        let conn = db::open_in_memory()?;
        db::configure(&conn)?;
        migrate(&conn, migrations_dir)?;

        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Take ownership of the underlying connection
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn migrate<P: AsRef<Path>>(conn: &Connection, migrations_dir: P) -> Result<()> {
    let exec = SqliteExecutor::new(conn);
    Runner::new(&exec).run(migrations_dir)?;
    Ok(())
}

fn migrate_locked<P: AsRef<Path>>(
    conn: &Connection,
    migrations_dir: P,
    opts: &LockOptions,
) -> Result<()> {
    let exec = SqliteExecutor::new(conn);
    Runner::new(&exec).run_locked(migrations_dir, opts)?;
    Ok(())
}
