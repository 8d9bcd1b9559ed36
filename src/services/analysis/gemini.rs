//! Gemini Critique Model
//!
//! Implementation of the CritiqueModel trait against the Generative Language
//! API. The request carries the instruction block plus the response schema as
//! a structured-output constraint, so the reply body is the critique JSON and
//! nothing else.

use async_trait::async_trait;
use serde::Deserialize;

use super::prompt::{analysis_response_schema, AnalysisRequest};
use super::provider::{parse_http_error, CritiqueModel, ModelError, ModelResult};
use crate::models::analysis::AnalysisResult;
use crate::models::settings::AppConfig;
use crate::utils::error::{AppError, AppResult};

/// Default Generative Language API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model
const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Finish reason reported when a candidate is blocked on safety grounds
const FINISH_REASON_SAFETY: &str = "SAFETY";

/// Gemini critique model
#[derive(Debug)]
pub struct GeminiModel {
    api_key: String,
    model: String,
    base_url: Option<String>,
    client: reqwest::Client,
}

impl GeminiModel {
    /// Create a new Gemini model with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: GEMINI_MODEL.to_string(),
            base_url: None,
            client: reqwest::Client::new(),
        }
    }

    /// Construct from resolved configuration, failing fast when the
    /// credential is absent. Done once at startup; the handle is then passed
    /// to whatever needs it.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let api_key = config.analysis_api_key.as_ref().ok_or_else(|| {
            AppError::config(
                "Analysis service is not configured. Please ensure the API Key is set.",
            )
        })?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full URL for a generateContent call
    fn request_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(GEMINI_API_URL);
        format!("{}/{}:generateContent", base, self.model)
    }

    /// Build the request body for the API
    fn build_request_body(&self, request: &AnalysisRequest) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{ "text": request.instruction() }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": analysis_response_schema(),
            }
        })
    }

    /// Parse a generateContent response body into a critique
    fn parse_response(body_text: &str) -> ModelResult<AnalysisResult> {
        let response: GenerateContentResponse =
            serde_json::from_str(body_text).map_err(|e| ModelError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        if let Some(feedback) = &response.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(ModelError::SafetyBlocked {
                    message: format!("prompt blocked: {}", reason),
                });
            }
        }

        let candidate = response
            .candidates
            .first()
            .ok_or_else(|| ModelError::ParseError {
                message: "response contained no candidates".to_string(),
            })?;

        if candidate.finish_reason.as_deref() == Some(FINISH_REASON_SAFETY) {
            return Err(ModelError::SafetyBlocked {
                message: "candidate blocked: SAFETY".to_string(),
            });
        }

        let text: String = candidate
            .content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ModelError::ParseError {
                message: "response contained no text".to_string(),
            });
        }

        serde_json::from_str(trimmed).map_err(|e| ModelError::ParseError {
            message: format!("reply did not match the analysis shape: {}", e),
        })
    }
}

#[async_trait]
impl CritiqueModel for GeminiModel {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &AnalysisRequest) -> ModelResult<AnalysisResult> {
        let body = self.build_request_body(request);

        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| ModelError::NetworkError {
                message: e.to_string(),
            })?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "gemini"));
        }

        Self::parse_response(&body_text)
    }
}

/// generateContent response format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}
