//! Error types for carerota

use thiserror::Error;

/// Boxed error from a collaborator's storage layer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for optimization runs.
#[derive(Debug, Error)]
pub enum CarerotaError {
    /// Constraint bundle rejected before any assignment was attempted
    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),

    /// Staff or shift snapshot is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A read collaborator failed; the run was not attempted
    #[error("Failed to load input: {0}")]
    Load(#[source] RepositoryError),

    /// Writing the computed assignments failed; the schedule itself is intact
    #[error("Failed to commit assignments: {0}")]
    Commit(#[source] RepositoryError),
}

/// Result type alias for carerota operations
pub type Result<T> = std::result::Result<T, CarerotaError>;

/// Failure reported by a staff, shift or time-off collaborator.
#[derive(Debug, Error)]
#[error("{collaborator}: {message}")]
pub struct RepositoryError {
    /// Name of the collaborator that failed (e.g. "shift store").
    pub collaborator: &'static str,
    pub message: String,
    #[source]
    pub source: Option<BoxError>,
}

impl RepositoryError {
    pub fn new(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying storage error.
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }
}
