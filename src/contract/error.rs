//! Transport-agnostic domain errors

/// Domain errors surfaced by the service layer
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Entity lookup failed
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource name, e.g. "dealer"
        resource: &'static str,
        /// Requested identifier
        id: i64,
    },

    /// Request payload failed a domain rule (missing required field,
    /// pre-set id on create, id mismatch on update)
    #[error("validation error: {message}")]
    Validation { message: String },

    /// State conflict
    #[error("conflict: {reason}")]
    Conflict { reason: String },

    /// Unexpected failure; the cause is logged, never exposed
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
