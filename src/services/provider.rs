use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub const JSON_MIME_TYPE: &str = "application/json";

/// One outbound generation call: model, prompt and response-format directive.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub response_mime_type: &'static str,
    /// Draft 7 schema the response must satisfy. Each provider translates it
    /// into its own dialect.
    pub response_schema: Value,
    pub schema_name: &'static str,
}

/// A hosted model that turns a prompt and schema into response text.
///
/// Implementations make exactly one request per call and report transport,
/// HTTP and provider-side failures as [`PlannerError::Transport`].
///
/// [`PlannerError::Transport`]: crate::PlannerError::Transport
#[async_trait]
pub trait GenerationProvider: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Send the request and return the raw response text, untrimmed.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Pull a provider error message out of a JSON error body, falling back to
/// the raw text.
pub(crate) fn api_error_message(response_text: &str) -> String {
    serde_json::from_str::<Value>(response_text)
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(|error| error.get("message"))
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| response_text.to_string())
}
