//! SQLite storage handle for the `alumno` table.
//!
//! # Responsibility
//! - Open and configure the single process-wide SQLite connection.
//! - Execute parameterized statements and hand rows back as column maps.
//!
//! # Invariants
//! - The `alumno` table exists before any handle is returned.
//! - Every statement commits on its own; no multi-statement transactions.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod store;

pub use rusqlite::types::Value as SqlValue;
pub use store::{RunResult, Store};

/// Schema bootstrap applied on every open. Idempotent.
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// One result row, keyed by column name.
pub type Row = BTreeMap<String, SqlValue>;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// A previous holder of the connection lock panicked.
    LockPoisoned,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::LockPoisoned => write!(f, "database connection lock is poisoned"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::LockPoisoned => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
