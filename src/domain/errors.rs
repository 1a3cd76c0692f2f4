//! Domain errors for the mock interview engine.

use thiserror::Error;
use uuid::Uuid;

/// Domain-level errors that can occur in the interview engine.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No session has this id.
    #[error("Interview session not found: {0}")]
    SessionNotFound(Uuid),

    /// The answer was empty or whitespace.
    #[error("Response cannot be empty")]
    EmptyResponse,

    /// A status change the lifecycle does not allow.
    #[error("Invalid state transition from {from} to {to}: {reason}")]
    InvalidStateTransition { from: String, to: String, reason: String },

    /// A controller call made in the wrong state.
    #[error("Cannot {action} while {state}")]
    InvalidAction { action: String, state: String },

    /// The question or feedback provider failed.
    #[error("Question generator failed: {0}")]
    GeneratorFailed(String),

    /// Input rejected before any change.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Storage failure.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored value could not be decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        DomainError::GeneratorFailed(err.without_url().to_string())
    }
}
