//! Unenrollment lead-time policy.
//!
//! The rule ("no unenrollment less than N days before course start") is a
//! configurable policy rather than a hard-coded check, so deployments that
//! do not want it can switch it off.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Minimum number of whole days before a course's start required to permit
/// unenrollment. `min_lead_days == 0` disables the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnenrollPolicy {
    pub min_lead_days: i64,
}

impl Default for UnenrollPolicy {
    fn default() -> Self {
        Self { min_lead_days: 7 }
    }
}

impl UnenrollPolicy {
    /// Policy with the rule switched off.
    pub const fn disabled() -> Self {
        Self { min_lead_days: 0 }
    }

    /// Rejects the unenrollment when fewer than `min_lead_days` days remain
    /// before `course_start`.
    ///
    /// Days are counted by ceiling: 6 days and one hour still counts as 7.
    /// A course that already started always yields a negative count and is
    /// therefore rejected whenever the rule is enabled.
    pub fn check(&self, now: Timestamp, course_start: Timestamp) -> Result<(), CoreError> {
        if self.min_lead_days <= 0 {
            return Ok(());
        }
        let remaining_secs = (course_start - now).num_seconds();
        let remaining_days =
            remaining_secs.div_euclid(86_400) + i64::from(remaining_secs.rem_euclid(86_400) > 0);
        if remaining_days < self.min_lead_days {
            return Err(CoreError::conflict(
                "Enrollment",
                "unenroll_lead_time",
                format!(
                    "Cannot unenroll less than {} days before course start",
                    self.min_lead_days
                ),
            ));
        }
        Ok(())
    }
}
