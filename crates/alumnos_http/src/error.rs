//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"error": "<message>"}` with one of
//! three statuses: 400 for bad input, 404 for a missing record, 500 for
//! anything else.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use std::fmt::Display;

pub const INVALID_ID: &str = "ID inválido";
pub const NOT_FOUND: &str = "Alumno no encontrado";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidInput(String),
    NotFound(&'static str),
    /// Carries only the public message; the cause is logged on creation.
    Internal(&'static str),
}

impl ApiError {
    pub fn invalid_id() -> Self {
        Self::InvalidInput(INVALID_ID.to_string())
    }

    /// Logs `cause` and hides it behind a fixed public message.
    pub fn internal(message: &'static str, cause: &dyn Display) -> Self {
        error!(
            "event=request_failed module=http status=error message=\"{}\" error={}",
            message, cause
        );
        Self::Internal(message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(message) => message.as_str(),
            Self::NotFound(message) | Self::Internal(message) => message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message(),
        });
        (self.status(), body).into_response()
    }
}
