//! Domain error taxonomy.

use crate::types::DbId;

/// Errors produced by the service rule layer.
///
/// Every service method either returns a value or fails with one of these
/// kinds. The HTTP layer maps each variant to a status code; variants carry
/// structured fields rather than only a formatted string.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    ///
    /// `id` is a string so composite keys (e.g. an enrollment's
    /// student/course pair) can be reported too.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Bad or missing input shape: field presence, format, numeric or date
    /// bounds.
    #[error("Validation failed: {message}")]
    Validation {
        field: Option<&'static str>,
        message: String,
    },

    /// A uniqueness, capacity, or business-rule violation.
    #[error("Conflict: {message}")]
    Conflict {
        entity: &'static str,
        constraint: &'static str,
        message: String,
    },

    /// A wrapped infrastructure failure. The originating message is
    /// preserved, never swallowed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// A `NotFound` for a single-id entity.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// A `NotFound` with a caller-formatted key (composite keys, emails).
    pub fn not_found_key(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: key.into(),
        }
    }

    /// A `Validation` error not tied to a single field.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// A `Validation` error naming the offending field.
    pub fn validation_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: Some(field),
            message: message.into(),
        }
    }

    /// A `Conflict` naming the entity and the violated constraint.
    pub fn conflict(
        entity: &'static str,
        constraint: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::Conflict {
            entity,
            constraint,
            message: message.into(),
        }
    }
}
