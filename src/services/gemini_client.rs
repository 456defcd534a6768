use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    error::{PlannerError, Result},
    schemas::provider::to_gemini_schema,
    services::provider::{api_error_message, GenerationProvider, GenerationRequest},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn build_generate_url(base_url: &str, model: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    format!("{}/v1beta/models/{}:generateContent", trimmed, model)
}

/// Request body for `generateContent` with a structured-output directive.
pub(crate) fn build_request_body(request: &GenerationRequest, response_schema: Value) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt }]
        }],
        "generationConfig": {
            "responseMimeType": request.response_mime_type,
            "responseSchema": response_schema,
        }
    })
}

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
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(PlannerError::Transport(format!(
            "prompt was blocked by the provider: {}",
            reason
        )));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(PlannerError::Transport(
            "provider returned no candidates".to_string(),
        ));
    };

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(PlannerError::Transport(format!(
            "provider returned an empty response (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = build_generate_url(&self.base_url, &request.model);
        let body = build_request_body(request, to_gemini_schema(&request.response_schema));

        debug!(target: "trip_planner::provider", provider = "gemini", %url, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| PlannerError::Transport(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| PlannerError::Transport(format!("Failed to read response: {err}")))?;

        if !status.is_success() {
            return Err(PlannerError::Transport(format!(
                "HTTP {} error: {}",
                status,
                api_error_message(&response_text)
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|err| {
                PlannerError::Transport(format!("Failed to decode provider response: {err}"))
            })?;

        extract_text(parsed)
    }
}
