//! Course entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub lecturer_id: DbId,
    /// Enrollment capacity; always > 0 (check constraint).
    pub max_participants: i32,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course. Required fields are `Option` so the
/// service layer can report which one is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCourse {
    pub title: String,
    pub description: String,
    pub lecturer_id: Option<DbId>,
    pub max_participants: Option<i32>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Validated insert shape assembled by the service layer.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub lecturer_id: DbId,
    pub max_participants: i32,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub lecturer_id: Option<DbId>,
    pub max_participants: Option<i32>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}
