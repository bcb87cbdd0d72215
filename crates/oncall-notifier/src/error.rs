//! Error types for the on-call notifier

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    /// A required environment variable was absent or empty
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, NotifierError>;
