//! Repository layer over the `alumno` table.
//!
//! # Responsibility
//! - Define entity-level data access contracts.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - Mutations addressed by a missing id are not errors; they report
//!   `changes == 0`.

pub mod alumno_repo;
