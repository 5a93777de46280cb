//! Student record domain model.

pub mod alumno;
