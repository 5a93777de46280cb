//! Alumno (student) domain model.
//!
//! # Responsibility
//! - Define the persisted student record and its writable field set.
//! - Define the closed set of single-field patches.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - A patch can only target `anio`, `nombre` or `apellido`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned primary key.
pub type AlumnoId = i64;

/// Persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alumno {
    pub id: AlumnoId,
    /// Academic year.
    pub anio: i64,
    pub nombre: String,
    pub apellido: String,
}

/// Writable fields used by insert and full update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAlumno {
    pub anio: i64,
    pub nombre: String,
    pub apellido: String,
}

impl NewAlumno {
    pub fn new(anio: i64, nombre: impl Into<String>, apellido: impl Into<String>) -> Self {
        Self {
            anio,
            nombre: nombre.into(),
            apellido: apellido.into(),
        }
    }
}

/// Single-column update.
///
/// Each variant names its column, so the column list used in SQL is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlumnoPatch {
    Anio(i64),
    Nombre(String),
    Apellido(String),
}

impl AlumnoPatch {
    /// Builds a patch from a raw column name and raw value.
    ///
    /// Column names are matched case-insensitively after trimming.
    ///
    /// # Errors
    /// - `UnknownField` when `field` is not a writable column.
    /// - `InvalidYear` when `field` is `anio` and `value` is not an integer.
    pub fn parse(field: &str, value: &str) -> Result<Self, AlumnoValidationError> {
        match field.trim().to_ascii_lowercase().as_str() {
            "anio" => parse_year(value).map(Self::Anio),
            "nombre" => Ok(Self::Nombre(value.to_string())),
            "apellido" => Ok(Self::Apellido(value.to_string())),
            _ => Err(AlumnoValidationError::UnknownField(field.to_string())),
        }
    }

    /// Target column name.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Anio(_) => "anio",
            Self::Nombre(_) => "nombre",
            Self::Apellido(_) => "apellido",
        }
    }
}

/// Parses a year value, accepting surrounding whitespace.
pub fn parse_year(value: &str) -> Result<i64, AlumnoValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| AlumnoValidationError::InvalidYear(value.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlumnoValidationError {
    UnknownField(String),
    InvalidYear(String),
}

impl Display for AlumnoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(field) => write!(
                f,
                "unknown field `{field}`; expected anio|nombre|apellido"
            ),
            Self::InvalidYear(value) => write!(f, "anio must be an integer, got `{value}`"),
        }
    }
}

impl Error for AlumnoValidationError {}
