//! Student entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Matriculation number, unique across all students.
    pub student_number: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student.
///
/// Fields default to empty strings so missing input surfaces as a domain
/// validation error (naming the field) instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_number: String,
}

/// DTO for updating an existing student. All fields are optional; only
/// supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStudent {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub student_number: Option<String>,
}
