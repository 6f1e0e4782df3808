//! Stateless repositories: every read and write goes straight to the
//! store, no caching.

pub mod course_repo;
pub mod enrollment_repo;
pub mod lecturer_repo;
pub mod student_repo;

pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lecturer_repo::LecturerRepo;
pub use student_repo::StudentRepo;
