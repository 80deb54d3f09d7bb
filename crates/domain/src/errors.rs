use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Malformed time: {0}")]
    MalformedTime(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}
