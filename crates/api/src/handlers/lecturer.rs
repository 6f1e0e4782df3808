//! Handlers for the `/lecturers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_db::models::course::Course;
use campus_db::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::LecturerService;
use crate::state::AppState;

/// Query parameters for the lecturer listing endpoint.
#[derive(Debug, Deserialize)]
pub struct LecturerListQuery {
    pub department: Option<String>,
}

/// POST /api/v1/lecturers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLecturer>,
) -> AppResult<(StatusCode, Json<Lecturer>)> {
    let lecturer = LecturerService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(lecturer)))
}

/// GET /api/v1/lecturers[?department=...]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LecturerListQuery>,
) -> AppResult<Json<Vec<Lecturer>>> {
    let lecturers = LecturerService::list(&state.pool, params.department.as_deref()).await?;
    Ok(Json(lecturers))
}

/// GET /api/v1/lecturers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lecturer>> {
    let lecturer = LecturerService::get(&state.pool, id).await?;
    Ok(Json(lecturer))
}

/// PUT /api/v1/lecturers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLecturer>,
) -> AppResult<Json<Lecturer>> {
    let lecturer = LecturerService::update(&state.pool, id, &input).await?;
    Ok(Json(lecturer))
}

/// DELETE /api/v1/lecturers/{id}
///
/// 409 while any course still references the lecturer.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    LecturerService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/lecturers/{id}/courses
pub async fn courses(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Course>>> {
    let courses = LecturerService::courses(&state.pool, id).await?;
    Ok(Json(courses))
}
