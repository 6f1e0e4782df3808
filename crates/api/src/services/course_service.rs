//! Business rules for courses.

use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_core::validation::{
    require_non_empty, require_some, validate_date_window, validate_positive,
};
use campus_db::models::course::{Course, CreateCourse, NewCourse, UpdateCourse};
use campus_db::repositories::{CourseRepo, LecturerRepo};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Validation, date-window checks, and lecturer-reference checks for
/// courses.
pub struct CourseService;

impl CourseService {
    /// Create a course. Requires title, lecturer, capacity, and both
    /// dates; the window must be ordered, the start must not be in the
    /// past, and the lecturer must exist.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> AppResult<Course> {
        require_non_empty(&[("title", &input.title)])?;
        let lecturer_id = require_some(input.lecturer_id, "lecturer_id")?;
        let max_participants = require_some(input.max_participants, "max_participants")?;
        let start_date = require_some(input.start_date, "start_date")?;
        let end_date = require_some(input.end_date, "end_date")?;

        validate_positive(max_participants, "max_participants")?;
        validate_date_window(start_date, end_date)?;
        if start_date < Utc::now() {
            return Err(CoreError::validation_field(
                "start_date",
                "Start date cannot be in the past",
            )
            .into());
        }

        if LecturerRepo::find_by_id(pool, lecturer_id).await?.is_none() {
            return Err(
                CoreError::validation_field("lecturer_id", "Lecturer not found").into(),
            );
        }

        let new_course = NewCourse {
            title: input.title.clone(),
            description: input.description.clone(),
            lecturer_id,
            max_participants,
            start_date,
            end_date,
        };
        Ok(CourseRepo::create(pool, &new_course).await?)
    }

    /// Fetch a course by ID.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Course> {
        CourseRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Course", id)))
    }

    /// List all courses, earliest start first.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Course>> {
        Ok(CourseRepo::find_all(pool).await?)
    }

    /// List courses that still have free places.
    pub async fn available(pool: &PgPool) -> AppResult<Vec<Course>> {
        Ok(CourseRepo::find_available(pool).await?)
    }

    /// Apply a partial update. When either date changes the window is
    /// re-validated against the merged (existing-or-patched) values; a
    /// changed capacity is re-checked for positivity and a changed
    /// lecturer for existence.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateCourse) -> AppResult<Course> {
        let existing = CourseRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Course", id)))?;

        if let Some(max_participants) = input.max_participants {
            validate_positive(max_participants, "max_participants")?;
        }

        if input.start_date.is_some() || input.end_date.is_some() {
            let start = input.start_date.unwrap_or(existing.start_date);
            let end = input.end_date.unwrap_or(existing.end_date);
            validate_date_window(start, end)?;
        }

        if let Some(lecturer_id) = input.lecturer_id {
            if LecturerRepo::find_by_id(pool, lecturer_id).await?.is_none() {
                return Err(
                    CoreError::validation_field("lecturer_id", "Lecturer not found").into(),
                );
            }
        }

        CourseRepo::update(pool, id, input)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Course", id)))
    }

    /// Delete a course. Its enrollments are removed by the store.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        let deleted = CourseRepo::delete(pool, id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::not_found("Course", id)))
        }
    }
}
