pub mod gemini_client;
pub mod openrouter_client;
pub mod prompt;
pub mod provider;

pub use gemini_client::GeminiClient;
pub use openrouter_client::OpenRouterClient;
pub use prompt::{build_prompt, GenerationPrompt};
pub use provider::{GenerationProvider, GenerationRequest, JSON_MIME_TYPE};
