//! Pure, stateless validation rules shared by the entity services.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;
use crate::types::Timestamp;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Returns true if `email` has the shape `local@domain.tld`.
///
/// Deliberately permissive: one `@`, no whitespace, at least one dot in the
/// domain part.
pub fn is_valid_email(email: &str) -> bool {
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));
    re.is_match(email)
}

/// Fails with a field-level validation error when `email` is malformed.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CoreError::validation_field("email", "Invalid email format"))
    }
}

/// Fails naming the first field whose value is blank.
pub fn require_non_empty(fields: &[(&'static str, &str)]) -> Result<(), CoreError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(CoreError::validation_field(
                name,
                format!("{name} must not be empty"),
            ));
        }
    }
    Ok(())
}

/// Unwraps a required value, failing with a field-level validation error
/// when it is absent.
pub fn require_some<T>(value: Option<T>, field: &'static str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::validation_field(field, format!("{field} is required")))
}

/// Fails unless `end` is strictly after `start`.
pub fn validate_date_window(start: Timestamp, end: Timestamp) -> Result<(), CoreError> {
    if start >= end {
        return Err(CoreError::validation("End date must be after start date"));
    }
    Ok(())
}

/// Fails unless `n` is strictly positive.
pub fn validate_positive(n: i32, field: &'static str) -> Result<(), CoreError> {
    if n <= 0 {
        return Err(CoreError::validation_field(
            field,
            format!("{field} must be greater than 0"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn accepts_minimal_valid_email() {
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn rejects_email_without_at() {
        assert!(!is_valid_email("alice.example.com"));
    }

    #[test]
    fn rejects_email_without_domain_dot() {
        assert!(!is_valid_email("alice@example"));
    }

    #[test]
    fn rejects_email_with_whitespace() {
        assert!(!is_valid_email("al ice@example.com"));
        assert!(!is_valid_email("alice@exam ple.com"));
    }

    #[test]
    fn rejects_email_with_two_ats() {
        assert!(!is_valid_email("alice@bob@example.com"));
    }

    #[test]
    fn require_non_empty_names_first_blank_field() {
        let err = require_non_empty(&[("first_name", "Ada"), ("last_name", "  ")]).unwrap_err();
        match err {
            CoreError::Validation { field, .. } => assert_eq!(field, Some("last_name")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn require_non_empty_passes_when_all_present() {
        assert!(require_non_empty(&[("a", "x"), ("b", "y")]).is_ok());
    }

    #[test]
    fn date_window_rejects_end_before_start() {
        let start = Utc::now() + Duration::days(2);
        let end = Utc::now() + Duration::days(1);
        assert!(validate_date_window(start, end).is_err());
    }

    #[test]
    fn date_window_rejects_equal_dates() {
        let t = Utc::now();
        assert!(validate_date_window(t, t).is_err());
    }

    #[test]
    fn date_window_accepts_ordered_dates() {
        let start = Utc::now();
        let end = start + Duration::days(30);
        assert!(validate_date_window(start, end).is_ok());
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(validate_positive(0, "max_participants").is_err());
        assert!(validate_positive(-3, "max_participants").is_err());
        assert!(validate_positive(1, "max_participants").is_ok());
    }
}
