use thiserror::Error;

/// Message shown for failures that do not map to a known category.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Main error type for the planner
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Rejected form input; never reaches the provider.
    #[error("{0}")]
    InputValidation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Failed to parse itinerary: {0}")]
    Parse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// The single human-readable string surfaced to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::InputValidation(message) => message.clone(),
            PlannerError::Config(_) => self.to_string(),
            PlannerError::Transport(detail) | PlannerError::Parse(detail) => {
                format!("Failed to generate itinerary: {}", detail)
            }
            PlannerError::Unknown(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::InputValidation(_) => "INPUT_VALIDATION_ERROR",
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Transport(_) => "TRANSPORT_ERROR",
            PlannerError::Parse(_) => "PARSE_ERROR",
            PlannerError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.user_message(),
            }
        })
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        PlannerError::Transport(err.to_string())
    }
}
