//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.
//!
//! The `Config`, `Safety`, `InvalidResponse`, and `Validation` variants carry
//! complete user-facing sentences and display them verbatim, because the input
//! view shows them to the user as dismissible messages. `Persistence` is never
//! shown: history is an enhancement, so save/load failures are absorbed and
//! logged at their call sites.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A required credential is absent or rejected; permanent for the process.
    #[error("{0}")]
    Config(String),

    /// The analysis service declined the content; the user can revise and retry.
    #[error("{0}")]
    Safety(String),

    /// The analysis service reply failed to parse or validate; transient.
    #[error("{0}")]
    InvalidResponse(String),

    /// History save/load failed; absorbed at the call site, never surfaced.
    #[error("History error: {0}")]
    Persistence(String),

    /// Caller-supplied input rejected before any request was built.
    #[error("{0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a safety rejection error
    pub fn safety(msg: impl Into<String>) -> Self {
        Self::Safety(msg.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Convert AppError to the message string shown in the input view
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
