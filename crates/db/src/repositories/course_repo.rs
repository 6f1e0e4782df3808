//! Repository for the `courses` table.

use campus_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::course::{Course, NewCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, lecturer_id, max_participants, start_date, \
                       end_date, created_at, updated_at";

/// CRUD operations and availability queries for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (title, description, lecturer_id, max_participants, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.lecturer_id)
            .bind(input.max_participants)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a course by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a course by ID and lock the row for the duration of the
    /// surrounding transaction (`SELECT ... FOR UPDATE`). Serializes
    /// concurrent enrollment attempts against the same course.
    pub async fn lock_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all courses, earliest start first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY start_date ASC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// List courses taught by the given lecturer.
    pub async fn find_by_lecturer(
        pool: &PgPool,
        lecturer_id: DbId,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM courses WHERE lecturer_id = $1 ORDER BY start_date ASC");
        sqlx::query_as::<_, Course>(&query)
            .bind(lecturer_id)
            .fetch_all(pool)
            .await
    }

    /// Count courses taught by the given lecturer. Used as the referential
    /// guard before a lecturer delete.
    pub async fn count_by_lecturer(pool: &PgPool, lecturer_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses WHERE lecturer_id = $1")
            .bind(lecturer_id)
            .fetch_one(pool)
            .await
    }

    /// List courses whose enrolled count is strictly below capacity.
    ///
    /// The count is derived from `enrollments` per call, never a stored
    /// counter.
    pub async fn find_available(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses c
             WHERE (SELECT COUNT(*) FROM enrollments e WHERE e.course_id = c.id)
                   < c.max_participants
             ORDER BY c.start_date ASC"
        );
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Update a course. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                lecturer_id = COALESCE($4, lecturer_id),
                max_participants = COALESCE($5, max_participants),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.lecturer_id)
            .bind(input.max_participants)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course by ID. Returns `true` if a row was removed.
    /// Enrollments referencing the course are removed by the store
    /// (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
