// Shared helpers for roost-store integration tests

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fresh in-memory database
#[allow(dead_code)]
pub fn setup_conn() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

/// Fresh empty migrations directory
#[allow(dead_code)]
pub fn setup_migrations_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp migrations directory")
}

/// Write one migration file into `dir`
#[allow(dead_code)]
pub fn write_migration(dir: &Path, name: &str, sql: &str) {
    std::fs::write(dir.join(name), sql).expect("Failed to write migration file");
}

/// The corpus schema shipped with this crate
#[allow(dead_code)]
pub fn shipped_migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// Ledger contents in the order migrations were applied
#[allow(dead_code)]
pub fn applied_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM schema_migrations ORDER BY id")
        .unwrap();

    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

/// All table names in the database
#[allow(dead_code)]
pub fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();

    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}
