//! Storage and record model for the alumnos service.
//! The HTTP layer depends on this crate and never touches SQL directly.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{DbError, DbResult, Row, RunResult, SqlValue, Store};
pub use logging::{default_log_level, init_logging};
pub use model::alumno::{parse_year, Alumno, AlumnoId, AlumnoPatch, AlumnoValidationError, NewAlumno};
pub use repo::alumno_repo::{AlumnoRepository, RepoError, RepoResult, SqliteAlumnoRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
