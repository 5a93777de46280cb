//! Request body fields for the POST routes.
//!
//! HTML forms send `application/x-www-form-urlencoded`; API clients may send
//! a JSON object instead. Both end up as one name -> value map.

use crate::error::ApiError;
use alumnos_core::{parse_year, AlumnoId, AlumnoValidationError, NewAlumno};
use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

const INVALID_BODY: &str = "Cuerpo de la petición inválido";

/// Flat view of a request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for Fields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(map) = Json::<Map<String, Value>>::from_request(req, state)
                .await
                .map_err(|_| ApiError::InvalidInput(INVALID_BODY.to_string()))?;
            return Ok(Self(map));
        }

        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidInput(INVALID_BODY.to_string()))?;
        Ok(Self(
            pairs
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect(),
        ))
    }
}

impl Fields {
    /// Record id: a JSON integer or a numeric string.
    pub fn id(&self) -> Result<AlumnoId, ApiError> {
        match self.0.get("id") {
            Some(Value::Number(number)) => number.as_i64().ok_or_else(ApiError::invalid_id),
            Some(Value::String(text)) => parse_id(text),
            _ => Err(ApiError::invalid_id()),
        }
    }

    /// Scalar field rendered as text. Numbers and booleans are stringified.
    pub fn text(&self, name: &'static str) -> Result<String, FieldError> {
        match self.0.get(name) {
            Some(Value::String(text)) => Ok(text.clone()),
            Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(value.to_string()),
            _ => Err(FieldError::Missing(name)),
        }
    }

    /// The three writable alumno fields.
    ///
    /// Callers decide the status; insert and full update treat a failure
    /// like any other store-side error.
    pub fn new_alumno(&self) -> Result<NewAlumno, FieldError> {
        let anio = parse_year(&self.text("anio")?).map_err(FieldError::Invalid)?;
        Ok(NewAlumno::new(
            anio,
            self.text("nombre")?,
            self.text("apellido")?,
        ))
    }
}

/// A body field that is absent or does not coerce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing(&'static str),
    Invalid(AlumnoValidationError),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "missing field `{name}`"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Missing(_) => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

/// Parses an id taken from a path segment or form field.
pub fn parse_id(raw: &str) -> Result<AlumnoId, ApiError> {
    raw.trim().parse::<AlumnoId>().map_err(|_| ApiError::invalid_id())
}
