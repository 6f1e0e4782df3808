//! Lecturer entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A lecturer row from the `lecturers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lecturer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new lecturer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateLecturer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

/// DTO for updating an existing lecturer. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateLecturer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}
