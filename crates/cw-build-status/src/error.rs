//! Error types for the build status reporter

use thiserror::Error;

/// Errors raised while turning a build outcome into published metrics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReporterError {
    /// A required action input was absent or empty
    #[error("Input required and not supplied: {0}")]
    MissingRequiredInput(String),

    /// The `status` input did not match `(success|failure)`
    #[error("Invalid build status {0} passed to cw-build-status")]
    InvalidStatus(String),

    /// The metrics backend rejected or failed the call
    #[error("Remote call failed: {0}")]
    RemoteCallFailure(String),
}

impl ReporterError {
    /// Create a missing input error
    pub fn missing_input(name: impl Into<String>) -> Self {
        ReporterError::MissingRequiredInput(name.into())
    }

    /// Create a remote call error
    pub fn remote(msg: impl Into<String>) -> Self {
        ReporterError::RemoteCallFailure(msg.into())
    }

    /// Check if the error was caused by the action's inputs
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReporterError::MissingRequiredInput(_) | ReporterError::InvalidStatus(_)
        )
    }
}

/// Result type alias for reporter operations
pub type Result<T> = std::result::Result<T, ReporterError>;
