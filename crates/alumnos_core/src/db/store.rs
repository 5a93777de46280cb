//! Process-wide SQLite handle.

use super::open::{open_connection, open_connection_in_memory};
use super::{DbError, DbResult, Row, SqlValue};
use rusqlite::{params_from_iter, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Outcome of a write statement.
///
/// Serialized as `{"changes": n, "lastInsertRowid": id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    /// Rows inserted, updated or deleted by the statement.
    pub changes: usize,
    /// Rowid of the most recent successful insert on this connection.
    pub last_insert_rowid: i64,
}

/// Shared handle over one SQLite connection.
///
/// The connection is serialized behind a mutex; callers share the handle
/// through `Arc` rather than a global.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Opens the database file at `path`, creating it when missing.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let conn = open_connection(path.as_ref())?;
        Ok(Self::from_connection(conn))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = open_connection_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Executes a write statement and reports affected-row metadata.
    pub fn run(&self, sql: &str, params: &[SqlValue]) -> DbResult<RunResult> {
        let conn = self.lock()?;
        let changes = conn.execute(sql, params_from_iter(params.iter()))?;
        Ok(RunResult {
            changes,
            last_insert_rowid: conn.last_insert_rowid(),
        })
    }

    /// Executes a query and returns every produced row.
    pub fn all(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let columns = column_names(&stmt);

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(read_row(row, &columns)?);
        }

        Ok(out)
    }

    /// Executes a query and returns its first row, if any.
    pub fn get(&self, sql: &str, params: &[SqlValue]) -> DbResult<Option<Row>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let columns = column_names(&stmt);

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let first = match rows.next()? {
            Some(row) => Some(read_row(row, &columns)?),
            None => None,
        };
        Ok(first)
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| DbError::LockPoisoned)
    }
}

fn column_names(stmt: &rusqlite::Statement<'_>) -> Vec<String> {
    stmt.column_names()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn read_row(row: &rusqlite::Row<'_>, columns: &[String]) -> DbResult<Row> {
    let mut out = Row::new();
    for (index, name) in columns.iter().enumerate() {
        out.insert(name.clone(), row.get::<_, SqlValue>(index)?);
    }
    Ok(out)
}
