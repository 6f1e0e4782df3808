//! Business rules for students.

use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_core::validation::{require_non_empty, validate_email};
use campus_db::models::enrollment::Enrollment;
use campus_db::models::student::{CreateStudent, Student, UpdateStudent};
use campus_db::repositories::{EnrollmentRepo, StudentRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Validation, uniqueness checks, and persistence orchestration for
/// students.
pub struct StudentService;

impl StudentService {
    /// Create a student after checking field presence, email format, and
    /// email / student-number uniqueness.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> AppResult<Student> {
        require_non_empty(&[
            ("first_name", &input.first_name),
            ("last_name", &input.last_name),
            ("email", &input.email),
            ("student_number", &input.student_number),
        ])?;
        validate_email(&input.email)?;

        if StudentRepo::find_by_email(pool, &input.email).await?.is_some() {
            return Err(CoreError::conflict(
                "Student",
                "uq_students_email",
                "Student with this email already exists",
            )
            .into());
        }
        if StudentRepo::find_by_student_number(pool, &input.student_number)
            .await?
            .is_some()
        {
            return Err(CoreError::conflict(
                "Student",
                "uq_students_student_number",
                "Student with this student number already exists",
            )
            .into());
        }

        Ok(StudentRepo::create(pool, input).await?)
    }

    /// Fetch a student by ID.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Student> {
        StudentRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Student", id)))
    }

    /// List all students.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Student>> {
        Ok(StudentRepo::find_all(pool).await?)
    }

    /// Look up a student by email. The email must be well-formed; whether
    /// a student exists under it is a separate question.
    pub async fn get_by_email(pool: &PgPool, email: &str) -> AppResult<Option<Student>> {
        validate_email(email)?;
        Ok(StudentRepo::find_by_email(pool, email).await?)
    }

    /// Apply a partial update. Changed email / student-number values are
    /// re-checked for uniqueness against all *other* students.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateStudent) -> AppResult<Student> {
        let existing = StudentRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Student", id)))?;

        if let Some(email) = &input.email {
            validate_email(email)?;
            if *email != existing.email
                && StudentRepo::find_by_email(pool, email).await?.is_some()
            {
                return Err(CoreError::conflict(
                    "Student",
                    "uq_students_email",
                    "Student with this email already exists",
                )
                .into());
            }
        }

        if let Some(number) = &input.student_number {
            if *number != existing.student_number
                && StudentRepo::find_by_student_number(pool, number)
                    .await?
                    .is_some()
            {
                return Err(CoreError::conflict(
                    "Student",
                    "uq_students_student_number",
                    "Student with this student number already exists",
                )
                .into());
            }
        }

        StudentRepo::update(pool, id, input)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Student", id)))
    }

    /// Delete a student. Their enrollments are removed by the store.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        let deleted = StudentRepo::delete(pool, id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::not_found("Student", id)))
        }
    }

    /// List a student's enrollments, newest first.
    pub async fn enrollments(pool: &PgPool, id: DbId) -> AppResult<Vec<Enrollment>> {
        if StudentRepo::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::not_found("Student", id)));
        }
        Ok(EnrollmentRepo::find_by_student(pool, id).await?)
    }
}
