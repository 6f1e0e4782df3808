//! Handlers for the `/students` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::enrollment::Enrollment;
use campus_db::models::student::{CreateStudent, Student, UpdateStudent};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::StudentService;
use crate::state::AppState;

/// Query parameters for the student search endpoint.
#[derive(Debug, Deserialize)]
pub struct StudentSearchQuery {
    pub email: String,
}

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = StudentService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentService::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/search?email=...
///
/// 400 when the email is malformed, 404 when no student carries it.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<StudentSearchQuery>,
) -> AppResult<Json<Student>> {
    let student = StudentService::get_by_email(&state.pool, &params.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found_key("Student", params.email.clone()))
        })?;
    Ok(Json(student))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentService::get(&state.pool, id).await?;
    Ok(Json(student))
}

/// PUT /api/v1/students/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentService::update(&state.pool, id, &input).await?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    StudentService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/students/{id}/enrollments
pub async fn enrollments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Enrollment>>> {
    let enrollments = StudentService::enrollments(&state.pool, id).await?;
    Ok(Json(enrollments))
}
