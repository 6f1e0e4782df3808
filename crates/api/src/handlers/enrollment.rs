//! Handlers for enrollments, mounted under `/courses/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_db::models::enrollment::Enrollment;
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::EnrollmentService;
use crate::state::AppState;

/// Request body for enrolling a student.
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub student_id: DbId,
}

/// POST /api/v1/courses/{id}/enrollments
pub async fn enroll(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(input): Json<EnrollRequest>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    let enrollment = EnrollmentService::enroll(&state.pool, input.student_id, course_id).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// DELETE /api/v1/courses/{id}/enrollments/{student_id}
pub async fn unenroll(
    State(state): State<AppState>,
    Path((course_id, student_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    EnrollmentService::unenroll(
        &state.pool,
        &state.config.unenroll_policy,
        student_id,
        course_id,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/courses/{id}/enrollments
pub async fn list_for_course(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<Vec<Enrollment>>> {
    let enrollments = EnrollmentService::for_course(&state.pool, course_id).await?;
    Ok(Json(enrollments))
}

/// GET /api/v1/courses/{id}/enrollments/{student_id}
///
/// Pure existence check, no side effect.
pub async fn status(
    State(state): State<AppState>,
    Path((course_id, student_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    let enrolled = EnrollmentService::is_enrolled(&state.pool, student_id, course_id).await?;
    Ok(Json(serde_json::json!({ "enrolled": enrolled })))
}

/// GET /api/v1/courses/{id}/availability
pub async fn availability(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let can_enroll = EnrollmentService::can_enroll(&state.pool, course_id).await?;
    Ok(Json(serde_json::json!({ "can_enroll": can_enroll })))
}
