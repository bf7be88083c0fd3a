use thiserror::Error;

/// Errors that can occur during invoice construction or processing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FactuurError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// A write was attempted with no authenticated user.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The record store rejected an operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Document generation failed.
    #[error("document error: {0}")]
    Document(String),
}

/// Error surfaced by the external persistence and storage collaborators.
///
/// The core consumes no structured taxonomy beyond these variants;
/// `MissingContainer` exists only so the logo upload path can create the
/// container and retry once.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,

    /// The blob storage container has not been created yet.
    #[error("storage container '{0}' is missing")]
    MissingContainer(String),

    /// Any other failure reported by the backing service.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[2].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
