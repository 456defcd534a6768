use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    error::{PlannerError, Result},
    schemas::provider::to_json_schema_response_format,
    services::provider::{api_error_message, GenerationProvider, GenerationRequest},
};

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Client for OpenRouter and other OpenAI-compatible chat completion APIs.
#[derive(Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenRouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_OPENROUTER_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    response_format: Option<Value>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            messages,
            response_format: None,
        }
    }

    pub fn with_response_format(mut self, response_format: Value) -> Self {
        self.response_format = Some(response_format);
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "model": self.model,
            "messages": self.messages,
        });

        if let Some(response_format) = self.response_format {
            body["response_format"] = response_format;
        }

        body
    }
}

fn extract_message_content(response_json: &Value) -> Result<String> {
    if let Some(error) = response_json.get("error") {
        let error_message = error
            .get("message")
            .and_then(|value| value.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| error.to_string());
        return Err(PlannerError::Transport(format!("API error: {}", error_message)));
    }

    response_json
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            PlannerError::Transport("provider response contained no message content".to_string())
        })
}

#[async_trait]
impl GenerationProvider for OpenRouterClient {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let request_url = build_chat_url(&self.base_url);
        let body = ChatCompletionRequest::new(
            request.model.clone(),
            vec![json!({ "role": "user", "content": request.prompt })],
        )
        .with_response_format(to_json_schema_response_format(
            request.schema_name,
            &request.response_schema,
        ))
        .into_value();

        debug!(target: "trip_planner::provider", provider = "openrouter", url = %request_url, "sending chat completion request");

        let response = self
            .http
            .post(&request_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", "trip-planner-rs")
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

        let response_json: Value = serde_json::from_str(&response_text)
            .map_err(|err| PlannerError::Transport(format!("Failed to parse JSON: {err}")))?;

        extract_message_content(&response_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url_is_not_doubled() {
        assert_eq!(
            build_chat_url("https://openrouter.ai/api/v1/"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(
            build_chat_url("http://localhost:8080/v1/chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body_includes_response_format() {
        let body = ChatCompletionRequest::new("openai/gpt-4.1-mini", vec![json!({"role": "user", "content": "hi"})])
            .with_response_format(json!({"type": "json_schema"}))
            .into_value();

        assert_eq!(body["model"], "openai/gpt-4.1-mini");
        assert_eq!(body["messages"][0]["content"], "hi");
        assert_eq!(body["response_format"]["type"], "json_schema");
    }

    #[test]
    fn test_extract_message_content() {
        let response = json!({"choices": [{"message": {"role": "assistant", "content": "{}"}}]});
        assert_eq!(extract_message_content(&response).unwrap(), "{}");

        let error = json!({"error": {"message": "No credits"}});
        let err = extract_message_content(&error).unwrap_err();
        assert_eq!(err, PlannerError::Transport("API error: No credits".to_string()));

        assert!(extract_message_content(&json!({"choices": []})).is_err());
    }
}
