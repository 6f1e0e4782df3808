//! Enrollment entity model.
//!
//! An enrollment links one student to one course; the (student, course)
//! pair is unique. There is no update DTO: enrollments are only created
//! and deleted.

use campus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An enrollment row from the `enrollments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    /// When the student joined the course.
    pub enrollment_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
