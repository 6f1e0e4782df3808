//! Business rules for lecturers.

use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_core::validation::{require_non_empty, validate_email};
use campus_db::models::course::Course;
use campus_db::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};
use campus_db::repositories::{CourseRepo, LecturerRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Validation, uniqueness checks, and the referential delete guard for
/// lecturers.
pub struct LecturerService;

impl LecturerService {
    /// Create a lecturer after checking field presence, email format, and
    /// email uniqueness.
    pub async fn create(pool: &PgPool, input: &CreateLecturer) -> AppResult<Lecturer> {
        require_non_empty(&[
            ("first_name", &input.first_name),
            ("last_name", &input.last_name),
            ("email", &input.email),
            ("department", &input.department),
        ])?;
        validate_email(&input.email)?;

        if LecturerRepo::find_by_email(pool, &input.email)
            .await?
            .is_some()
        {
            return Err(CoreError::conflict(
                "Lecturer",
                "uq_lecturers_email",
                "Lecturer with this email already exists",
            )
            .into());
        }

        Ok(LecturerRepo::create(pool, input).await?)
    }

    /// Fetch a lecturer by ID.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Lecturer> {
        LecturerRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Lecturer", id)))
    }

    /// List all lecturers, optionally filtered by department.
    pub async fn list(pool: &PgPool, department: Option<&str>) -> AppResult<Vec<Lecturer>> {
        let lecturers = match department {
            Some(dep) => LecturerRepo::find_by_department(pool, dep).await?,
            None => LecturerRepo::find_all(pool).await?,
        };
        Ok(lecturers)
    }

    /// Apply a partial update. A changed email is re-checked for
    /// uniqueness against all *other* lecturers.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateLecturer) -> AppResult<Lecturer> {
        let existing = LecturerRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Lecturer", id)))?;

        if let Some(email) = &input.email {
            validate_email(email)?;
            if *email != existing.email
                && LecturerRepo::find_by_email(pool, email).await?.is_some()
            {
                return Err(CoreError::conflict(
                    "Lecturer",
                    "uq_lecturers_email",
                    "Lecturer with this email already exists",
                )
                .into());
            }
        }

        LecturerRepo::update(pool, id, input)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Lecturer", id)))
    }

    /// Delete a lecturer. Blocked while any course references them; the
    /// check runs in the service, with the store's RESTRICT constraint as
    /// backstop.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if LecturerRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::not_found("Lecturer", id)));
        }

        let course_count = CourseRepo::count_by_lecturer(pool, id).await?;
        if course_count > 0 {
            return Err(CoreError::conflict(
                "Lecturer",
                "fk_courses_lecturer",
                format!("Lecturer is still assigned to {course_count} course(s)"),
            )
            .into());
        }

        LecturerRepo::delete(pool, id).await?;
        Ok(())
    }

    /// List the courses taught by a lecturer.
    pub async fn courses(pool: &PgPool, id: DbId) -> AppResult<Vec<Course>> {
        if LecturerRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::not_found("Lecturer", id)));
        }
        Ok(CourseRepo::find_by_lecturer(pool, id).await?)
    }
}
