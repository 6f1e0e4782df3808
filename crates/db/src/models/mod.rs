//! Entity row structs and create/update DTOs.

pub mod course;
pub mod enrollment;
pub mod lecturer;
pub mod student;
