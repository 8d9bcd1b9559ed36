//! Critique Model Provider Trait
//!
//! Defines the seam between the analysis pipeline and the hosted model that
//! actually produces critiques. Implementations return the model's reply
//! parsed into the critique shape but not yet normalized; everything above
//! this trait is provider-agnostic and testable with a mock.

use async_trait::async_trait;
use thiserror::Error;

use super::prompt::AnalysisRequest;
use crate::models::analysis::AnalysisResult;

/// Error types for critique model calls
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    /// Authentication failed (missing or invalid API key)
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Rate limit exceeded
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// Invalid request (bad parameters)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Server error from the provider
    #[error("Server error ({status:?}): {message}")]
    ServerError { message: String, status: Option<u16> },

    /// Network/connection error
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Reply failed to parse or did not match the required shape
    #[error("Parse error: {message}")]
    ParseError { message: String },

    /// The provider declined the content on safety grounds
    #[error("Blocked: {message}")]
    SafetyBlocked { message: String },

    /// Other error
    #[error("Error: {message}")]
    Other { message: String },
}

/// Result type for critique model calls
pub type ModelResult<T> = Result<T, ModelError>;

/// Trait implemented by hosted critique models.
///
/// One round trip per call, no internal retry: retries, if any, belong to the
/// transport or to a fresh user submission.
#[async_trait]
pub trait CritiqueModel: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Generate a critique for the given request.
    ///
    /// Returns the reply exactly as the model produced it (scores not yet
    /// normalized, title not yet overwritten).
    async fn generate(&self, request: &AnalysisRequest) -> ModelResult<AnalysisResult>;
}

/// Helper function to create an error for a missing API key
pub fn missing_api_key_error(provider: &str) -> ModelError {
    ModelError::AuthenticationFailed {
        message: format!("API Key not configured for {}", provider),
    }
}

/// Helper function to map HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> ModelError {
    match status {
        401 => ModelError::AuthenticationFailed {
            message: format!("{}: invalid API Key", provider),
        },
        403 => ModelError::AuthenticationFailed {
            message: format!("{}: access denied", provider),
        },
        429 => ModelError::RateLimited {
            message: body.to_string(),
        },
        400 => ModelError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => ModelError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => ModelError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
