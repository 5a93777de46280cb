//! Alumno HTTP routes.
//!
//! Read routes answer with the record(s) as JSON. Write routes answer with
//! `{"mensaje": ..., "resultado": {"changes": n, "lastInsertRowid": id}}`.

use std::fmt::Display;
use std::sync::Arc;

use alumnos_core::{Alumno, AlumnoPatch, AlumnoRepository, RepoResult, RunResult};
use axum::{
    extract::{Path, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use log::info;
use serde::Serialize;

use crate::error::{ApiError, NOT_FOUND};
use crate::extract::{parse_id, Fields};
use crate::forms::{DELETE_FORM, INSERT_FORM, PATCH_FORM, UPDATE_FORM, WELCOME_PAGE};

// ==================
// Shared State
// ==================

/// Repository handle injected into every handler.
#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn AlumnoRepository + Send + Sync>,
}

impl AppState {
    pub fn new<R>(repo: R) -> Self
    where
        R: AlumnoRepository + Send + Sync + 'static,
    {
        Self {
            repo: Arc::new(repo),
        }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub mensaje: &'static str,
    pub resultado: RunResult,
}

type JsonResult<T> = Result<Json<T>, ApiError>;

const INSERT_FAILED: &str = "Error al insertar alumno";
const UPDATE_FAILED: &str = "Error al actualizar alumno";

// ==================
// Routes
// ==================

pub fn alumno_routes(state: AppState) -> Router {
    Router::new()
        // Browser pages
        .route("/", get(|| async { Html(WELCOME_PAGE) }))
        .route("/insertForm", get(|| async { Html(INSERT_FORM) }))
        .route("/updateForm", get(|| async { Html(UPDATE_FORM) }))
        .route("/patchForm", get(|| async { Html(PATCH_FORM) }))
        .route("/deleteForm", get(|| async { Html(DELETE_FORM) }))
        // API
        .route("/getAll", get(get_all_handler))
        .route("/get/:id", get(get_handler))
        .route("/insert", post(insert_handler))
        .route("/put", post(put_handler))
        .route("/patch", post(patch_handler))
        .route("/delete", post(delete_handler))
        .with_state(state)
}

/// Runs a repository call on the blocking pool.
///
/// Any failure becomes a 500 carrying `failure` as its public message.
async fn with_repo<T, F>(state: &AppState, failure: &'static str, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn AlumnoRepository) -> RepoResult<T> + Send + 'static,
{
    let repo = Arc::clone(&state.repo);
    match tokio::task::spawn_blocking(move || op(repo.as_ref())).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(ApiError::internal(failure, &err)),
        Err(err) => Err(ApiError::internal(failure, &err)),
    }
}

/// Patch targets outside the known columns are the caller's fault.
fn invalid_field(err: impl Display) -> ApiError {
    ApiError::InvalidInput(format!("Campo inválido: {err}"))
}

// ==================
// Handlers
// ==================

async fn get_all_handler(State(state): State<AppState>) -> JsonResult<Vec<Alumno>> {
    let alumnos = with_repo(&state, "Error al obtener alumnos", |repo| repo.get_all()).await?;
    Ok(Json(alumnos))
}

async fn get_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> JsonResult<Alumno> {
    let id = parse_id(&raw_id)?;
    let alumno = with_repo(&state, "Error al obtener alumno", move |repo| repo.get(id)).await?;
    alumno.map(Json).ok_or(ApiError::NotFound(NOT_FOUND))
}

async fn insert_handler(
    State(state): State<AppState>,
    fields: Fields,
) -> JsonResult<MutationResponse> {
    let alumno = fields
        .new_alumno()
        .map_err(|err| ApiError::internal(INSERT_FAILED, &err))?;
    let resultado = with_repo(&state, INSERT_FAILED, move |repo| repo.insert(&alumno)).await?;

    info!(
        "event=alumno_insert module=http status=ok id={}",
        resultado.last_insert_rowid
    );
    Ok(Json(MutationResponse {
        mensaje: "Alumno insertado con éxito",
        resultado,
    }))
}

async fn put_handler(
    State(state): State<AppState>,
    fields: Fields,
) -> JsonResult<MutationResponse> {
    let id = fields.id()?;
    let alumno = fields
        .new_alumno()
        .map_err(|err| ApiError::internal(UPDATE_FAILED, &err))?;
    let resultado =
        with_repo(&state, UPDATE_FAILED, move |repo| repo.update(id, &alumno)).await?;

    info!(
        "event=alumno_update module=http status=ok id={} changes={}",
        id, resultado.changes
    );
    Ok(Json(MutationResponse {
        mensaje: "Alumno actualizado con éxito",
        resultado,
    }))
}

async fn patch_handler(
    State(state): State<AppState>,
    fields: Fields,
) -> JsonResult<MutationResponse> {
    let id = fields.id()?;
    let campo = fields.text("campo").map_err(invalid_field)?;
    let valor = fields.text("valor").map_err(invalid_field)?;
    let patch = AlumnoPatch::parse(&campo, &valor).map_err(invalid_field)?;
    let column = patch.column();
    let resultado = with_repo(&state, "Error al actualizar campo", move |repo| {
        repo.patch(id, &patch)
    })
    .await?;

    info!(
        "event=alumno_patch module=http status=ok id={} column={} changes={}",
        id, column, resultado.changes
    );
    Ok(Json(MutationResponse {
        mensaje: "Campo actualizado con éxito",
        resultado,
    }))
}

async fn delete_handler(
    State(state): State<AppState>,
    fields: Fields,
) -> JsonResult<MutationResponse> {
    let id = fields.id()?;
    let resultado =
        with_repo(&state, "Error al eliminar alumno", move |repo| repo.delete(id)).await?;

    info!(
        "event=alumno_delete module=http status=ok id={} changes={}",
        id, resultado.changes
    );
    Ok(Json(MutationResponse {
        mensaje: "Alumno eliminado con éxito",
        resultado,
    }))
}
