//! SQLite executor
//!
//! Implements the migration engine's executor capability on top of a
//! rusqlite connection.

use roost_migrate::executor::{BoxError, Executor};
use rusqlite::{params_from_iter, Connection, OptionalExtension};

/// [`Executor`] over a live SQLite connection
#[derive(Debug)]
pub struct SqliteExecutor<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteExecutor<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl Executor for SqliteExecutor<'_> {
    fn execute_batch(&self, sql: &str) -> Result<(), BoxError> {
        self.conn.execute_batch(sql).map_err(Into::into)
    }

    fn execute(&self, sql: &str, params: &[&str]) -> Result<usize, BoxError> {
        self.conn
            .execute(sql, params_from_iter(params.iter()))
            .map_err(Into::into)
    }

    fn query_scalar(&self, sql: &str, params: &[&str]) -> Result<Option<i64>, BoxError> {
        self.conn
            .query_row(sql, params_from_iter(params.iter()), |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }
}
