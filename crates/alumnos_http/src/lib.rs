//! HTTP front-end for the alumno table.
//!
//! # Endpoints
//!
//! - `/`, `/insertForm`, `/updateForm`, `/patchForm`, `/deleteForm` - HTML pages
//! - `GET /getAll`, `GET /get/:id` - reads
//! - `POST /insert`, `/put`, `/patch`, `/delete` - writes
//! - anything else - static files from the public directory

pub mod config;
pub mod error;
pub mod extract;
pub mod forms;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::{alumno_routes, AppState};
pub use server::{build_router, HttpServer};
