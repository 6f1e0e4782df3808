//! Domain core for the course-management backend.
//!
//! Holds everything the rule layer needs that is independent of the
//! database and the HTTP surface: the error taxonomy, shared id/timestamp
//! types, the pure validation rules, and the unenrollment policy.

pub mod error;
pub mod policy;
pub mod types;
pub mod validation;
