//! Repository for the `enrollments` table.
//!
//! The methods on the enroll path are generic over the executor so they
//! can run inside the course-locking transaction as well as straight off
//! the pool.

use campus_core::types::{DbId, Timestamp};
use sqlx::{PgExecutor, PgPool};

use crate::models::enrollment::Enrollment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, course_id, enrollment_date, created_at, updated_at";

/// Create/delete operations and lookups for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment, returning the created row.
    pub async fn create<'e, E>(
        executor: E,
        student_id: DbId,
        course_id: DbId,
        enrollment_date: Timestamp,
    ) -> Result<Enrollment, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO enrollments (student_id, course_id, enrollment_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .bind(enrollment_date)
            .fetch_one(executor)
            .await
    }

    /// Find an enrollment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a student's enrollments, newest first.
    pub async fn find_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List a course's enrollments, newest first.
    pub async fn find_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE course_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Find the enrollment for an exact (student, course) pair.
    pub async fn find_by_student_and_course<'e, E>(
        executor: E,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 AND course_id = $2"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(executor)
            .await
    }

    /// Count enrollments for a course. This is the capacity accounting:
    /// always derived, recomputed per call.
    pub async fn count_by_course<'e, E>(executor: E, course_id: DbId) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments WHERE course_id = $1")
            .bind(course_id)
            .fetch_one(executor)
            .await
    }

    /// Delete an enrollment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
