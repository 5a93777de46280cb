//! Alumno repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate entity operations into single SQL statements.
//! - Decode column maps returned by the store into `Alumno` values.
//!
//! # Invariants
//! - Read paths reject rows that do not decode instead of masking them.
//! - Column names interpolated into SQL come only from `AlumnoPatch`.

use crate::db::{DbError, Row, RunResult, SqlValue, Store};
use crate::model::alumno::{Alumno, AlumnoId, AlumnoPatch, NewAlumno};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

const ALUMNO_SELECT_SQL: &str = "SELECT id, anio, nombre, apellido FROM alumno";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for alumno persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted alumno data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Repository interface for alumno CRUD operations.
pub trait AlumnoRepository {
    /// Every record, ordered by id. No pagination.
    fn get_all(&self) -> RepoResult<Vec<Alumno>>;
    fn get(&self, id: AlumnoId) -> RepoResult<Option<Alumno>>;
    fn insert(&self, fields: &NewAlumno) -> RepoResult<RunResult>;
    /// Overwrites all writable fields. `changes == 0` when `id` is absent.
    fn update(&self, id: AlumnoId, fields: &NewAlumno) -> RepoResult<RunResult>;
    /// Overwrites exactly one column. `changes == 0` when `id` is absent.
    fn patch(&self, id: AlumnoId, patch: &AlumnoPatch) -> RepoResult<RunResult>;
    fn delete(&self, id: AlumnoId) -> RepoResult<RunResult>;
}

/// SQLite-backed alumno repository.
#[derive(Clone)]
pub struct SqliteAlumnoRepository {
    store: Arc<Store>,
}

impl SqliteAlumnoRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl AlumnoRepository for SqliteAlumnoRepository {
    fn get_all(&self) -> RepoResult<Vec<Alumno>> {
        let rows = self
            .store
            .all(&format!("{ALUMNO_SELECT_SQL} ORDER BY id ASC;"), &[])?;
        rows.iter().map(parse_alumno_row).collect()
    }

    fn get(&self, id: AlumnoId) -> RepoResult<Option<Alumno>> {
        let row = self.store.get(
            &format!("{ALUMNO_SELECT_SQL} WHERE id = ?1;"),
            &[SqlValue::Integer(id)],
        )?;
        row.as_ref().map(parse_alumno_row).transpose()
    }

    fn insert(&self, fields: &NewAlumno) -> RepoResult<RunResult> {
        let result = self.store.run(
            "INSERT INTO alumno (anio, nombre, apellido) VALUES (?1, ?2, ?3);",
            &writable_values(fields),
        )?;
        Ok(result)
    }

    fn update(&self, id: AlumnoId, fields: &NewAlumno) -> RepoResult<RunResult> {
        let mut values = writable_values(fields).to_vec();
        values.push(SqlValue::Integer(id));

        let result = self.store.run(
            "UPDATE alumno
             SET
                anio = ?1,
                nombre = ?2,
                apellido = ?3
             WHERE id = ?4;",
            &values,
        )?;
        Ok(result)
    }

    fn patch(&self, id: AlumnoId, patch: &AlumnoPatch) -> RepoResult<RunResult> {
        let value = match patch {
            AlumnoPatch::Anio(anio) => SqlValue::Integer(*anio),
            AlumnoPatch::Nombre(text) | AlumnoPatch::Apellido(text) => {
                SqlValue::Text(text.clone())
            }
        };

        let result = self.store.run(
            &format!("UPDATE alumno SET {} = ?1 WHERE id = ?2;", patch.column()),
            &[value, SqlValue::Integer(id)],
        )?;
        Ok(result)
    }

    fn delete(&self, id: AlumnoId) -> RepoResult<RunResult> {
        let result = self
            .store
            .run("DELETE FROM alumno WHERE id = ?1;", &[SqlValue::Integer(id)])?;
        Ok(result)
    }
}

fn writable_values(fields: &NewAlumno) -> [SqlValue; 3] {
    [
        SqlValue::Integer(fields.anio),
        SqlValue::Text(fields.nombre.clone()),
        SqlValue::Text(fields.apellido.clone()),
    ]
}

fn parse_alumno_row(row: &Row) -> RepoResult<Alumno> {
    Ok(Alumno {
        id: integer_column(row, "id")?,
        anio: integer_column(row, "anio")?,
        nombre: text_column(row, "nombre")?,
        apellido: text_column(row, "apellido")?,
    })
}

fn integer_column(row: &Row, column: &str) -> RepoResult<i64> {
    match row.get(column) {
        Some(SqlValue::Integer(value)) => Ok(*value),
        Some(other) => Err(RepoError::InvalidData(format!(
            "expected integer in alumno.{column}, got {other:?}"
        ))),
        None => Err(RepoError::InvalidData(format!(
            "missing column alumno.{column}"
        ))),
    }
}

fn text_column(row: &Row, column: &str) -> RepoResult<String> {
    match row.get(column) {
        Some(SqlValue::Text(value)) => Ok(value.clone()),
        Some(other) => Err(RepoError::InvalidData(format!(
            "expected text in alumno.{column}, got {other:?}"
        ))),
        None => Err(RepoError::InvalidData(format!(
            "missing column alumno.{column}"
        ))),
    }
}
