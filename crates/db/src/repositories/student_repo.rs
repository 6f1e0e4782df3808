//! Repository for the `students` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, student_number, created_at, updated_at";

/// CRUD operations and unique-key lookups for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (first_name, last_name, email, student_number)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.student_number)
            .fetch_one(pool)
            .await
    }

    /// Find a student by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students, ordered by last then first name.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY last_name, first_name");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Find a student by email (unique).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE email = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by matriculation number (unique).
    pub async fn find_by_student_number(
        pool: &PgPool,
        student_number: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE student_number = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(student_number)
            .fetch_optional(pool)
            .await
    }

    /// Update a student. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                student_number = COALESCE($5, student_number),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.student_number)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    /// Enrollments referencing the student are removed by the store
    /// (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
