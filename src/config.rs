use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    error::{PlannerError, Result},
    services::{GeminiClient, GenerationProvider, OpenRouterClient},
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_OPENROUTER_MODEL: &str = "google/gemini-2.5-flash";
pub const MODEL_ENV: &str = "TRIP_PLANNER_MODEL";
const MODEL_VARS: &[&str] = &[MODEL_ENV];

/// Which hosted model API the planner talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    Gemini,
    OpenRouter,
}

impl ProviderKind {
    /// Environment variables consulted for the API key, in order.
    pub fn api_key_vars(self) -> &'static [&'static str] {
        match self {
            ProviderKind::Gemini => &["GEMINI_API_KEY", "API_KEY"],
            ProviderKind::OpenRouter => &["OPENROUTER_API_KEY", "OPENAI_API_KEY"],
        }
    }

    pub fn base_url_vars(self) -> &'static [&'static str] {
        match self {
            ProviderKind::Gemini => &["GEMINI_BASE_URL"],
            ProviderKind::OpenRouter => &["OPENROUTER_BASE_URL", "OPENAI_BASE_URL"],
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::Gemini => DEFAULT_GEMINI_MODEL,
            ProviderKind::OpenRouter => DEFAULT_OPENROUTER_MODEL,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Gemini => f.write_str("gemini"),
            ProviderKind::OpenRouter => f.write_str("openrouter"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "openrouter" | "openai" => Ok(ProviderKind::OpenRouter),
            other => Err(PlannerError::Config(format!(
                "unknown provider `{}` (expected `gemini` or `openrouter`)",
                other
            ))),
        }
    }
}

/// Everything needed to construct the itinerary client.
#[derive(Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}

impl fmt::Debug for PlannerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlannerConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PlannerConfig {
    pub fn new(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: provider.default_model().to_string(),
            base_url: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load from the process environment (after `.env`, if present).
    pub fn from_env(provider: ProviderKind) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(provider, |name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// A missing or blank API key is reported as [`PlannerError::Config`].
    pub fn from_lookup<F>(provider: ProviderKind, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(*name))
                .find(|value| !value.trim().is_empty())
        };

        let api_key = first_set(provider.api_key_vars()).ok_or_else(|| {
            PlannerError::Config(format!(
                "{} environment variable is not set",
                provider.api_key_vars().join(" or ")
            ))
        })?;

        let mut config = Self::new(provider, api_key);
        if let Some(model) = first_set(MODEL_VARS) {
            config.model = model;
        }
        config.base_url = first_set(provider.base_url_vars());
        Ok(config)
    }

    /// Build the HTTP provider described by this configuration.
    pub fn build_provider(&self) -> Arc<dyn GenerationProvider> {
        match self.provider {
            ProviderKind::Gemini => {
                let mut client = GeminiClient::new(self.api_key.clone());
                if let Some(base_url) = &self.base_url {
                    client = client.with_base_url(base_url.clone());
                }
                Arc::new(client)
            }
            ProviderKind::OpenRouter => {
                let mut client = OpenRouterClient::new(self.api_key.clone());
                if let Some(base_url) = &self.base_url {
                    client = client.with_base_url(base_url.clone());
                }
                Arc::new(client)
            }
        }
    }
}
