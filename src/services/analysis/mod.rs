//! Analysis Service
//!
//! The full critique pipeline: build the request, call the critique model,
//! normalize the reply, and map provider failures onto the user-facing error
//! taxonomy. One round trip per submission, no automatic retry anywhere;
//! every retry is a fresh user-initiated submission.

pub mod gemini;
pub mod prompt;
pub mod provider;

use std::sync::Arc;

use crate::models::analysis::AnalysisResult;
use crate::utils::error::{AppError, AppResult};

pub use gemini::GeminiModel;
pub use prompt::{analysis_response_schema, AnalysisRequest, ResponseSchema};
pub use provider::{CritiqueModel, ModelError, ModelResult};

/// Message shown when the analysis credential is missing or rejected.
pub const MISCONFIGURED_MESSAGE: &str =
    "The AI service is not configured correctly. Please check the API Key.";

/// Message shown when the provider declines the content.
pub const SAFETY_MESSAGE: &str =
    "The request was blocked due to safety concerns. Please revise the lyrics and try again.";

/// Message shown for any other failed analysis call.
pub const INVALID_RESPONSE_MESSAGE: &str =
    "The AI model failed to generate a valid analysis. This could be a temporary issue. \
     Please try again later.";

/// Provider-agnostic analysis pipeline.
pub struct AnalysisService {
    model: Arc<dyn CritiqueModel>,
}

impl AnalysisService {
    /// Create a service over the given critique model.
    pub fn new(model: Arc<dyn CritiqueModel>) -> Self {
        Self { model }
    }

    /// Name of the underlying model, for logging.
    pub fn model_name(&self) -> String {
        format!("{}/{}", self.model.name(), self.model.model())
    }

    /// Run one analysis: generate, normalize every score, and overwrite the
    /// title with the caller's title (the model's echo is never trusted).
    /// The returned record is transient: no id, no timestamp.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AppResult<AnalysisResult> {
        let mut result = self
            .model
            .generate(request)
            .await
            .map_err(map_model_error)?;

        result.normalize_scores();
        result.title = request.title.clone();
        result.id = None;
        result.created_at = None;

        tracing::info!(
            title = %result.title,
            overall_score = result.overall_score,
            "analysis completed"
        );
        Ok(result)
    }
}

/// Map a provider failure onto the three user-facing failure kinds.
fn map_model_error(err: ModelError) -> AppError {
    tracing::error!(error = %err, "analysis call failed");
    match &err {
        ModelError::SafetyBlocked { .. } => AppError::safety(SAFETY_MESSAGE),
        ModelError::AuthenticationFailed { .. } => AppError::config(MISCONFIGURED_MESSAGE),
        _ => {
            // Providers that signal blocks or credential problems only through
            // message text are classified by substring, like everything else
            // that reaches the user.
            let message = err.to_string();
            if message.contains("SAFETY") {
                AppError::safety(SAFETY_MESSAGE)
            } else if message.to_lowercase().contains("api key") {
                AppError::config(MISCONFIGURED_MESSAGE)
            } else {
                AppError::invalid_response(INVALID_RESPONSE_MESSAGE)
            }
        }
    }
}
