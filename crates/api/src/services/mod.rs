//! Entity services: the business-rule layer.
//!
//! Services orchestrate the pure validation rules, the repositories, and
//! the cross-entity consistency checks (uniqueness, capacity, referential
//! guards). They hold no state; every read goes to the store.

pub mod course_service;
pub mod enrollment_service;
pub mod lecturer_service;
pub mod student_service;

pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use lecturer_service::LecturerService;
pub use student_service::StudentService;
