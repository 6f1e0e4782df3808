//! Repository for the `lecturers` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, department, created_at, updated_at";

/// CRUD operations and lookups for lecturers.
pub struct LecturerRepo;

impl LecturerRepo {
    /// Insert a new lecturer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLecturer) -> Result<Lecturer, sqlx::Error> {
        let query = format!(
            "INSERT INTO lecturers (first_name, last_name, email, department)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.department)
            .fetch_one(pool)
            .await
    }

    /// Find a lecturer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lecturers WHERE id = $1");
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all lecturers, ordered by last then first name.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Lecturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lecturers ORDER BY last_name, first_name");
        sqlx::query_as::<_, Lecturer>(&query).fetch_all(pool).await
    }

    /// Find a lecturer by email (unique).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lecturers WHERE email = $1");
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List lecturers belonging to a department.
    pub async fn find_by_department(
        pool: &PgPool,
        department: &str,
    ) -> Result<Vec<Lecturer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lecturers WHERE department = $1 ORDER BY last_name, first_name"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(department)
            .fetch_all(pool)
            .await
    }

    /// Update a lecturer. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLecturer,
    ) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!(
            "UPDATE lecturers SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                department = COALESCE($5, department),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.department)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lecturer by ID. Returns `true` if a row was removed.
    ///
    /// Callers must check for referencing courses first; the store enforces
    /// RESTRICT as a backstop.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lecturers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
