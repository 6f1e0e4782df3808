//! Handlers for the `/courses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::types::DbId;
use campus_db::models::course::{Course, CreateCourse, UpdateCourse};

use crate::error::AppResult;
use crate::services::CourseService;
use crate::state::AppState;

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = CourseService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseService::list(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/available
pub async fn available(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseService::available(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseService::get(&state.pool, id).await?;
    Ok(Json(course))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let course = CourseService::update(&state.pool, id, &input).await?;
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    CourseService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
