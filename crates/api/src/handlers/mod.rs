//! Thin HTTP handlers; all rules live in the service layer.

pub mod course;
pub mod enrollment;
pub mod lecturer;
pub mod student;
