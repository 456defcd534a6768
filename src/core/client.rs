use crate::{
    config::{PlannerConfig, ProviderKind},
    error::Result,
    services::{build_prompt, GenerationProvider, GenerationRequest, JSON_MIME_TYPE},
    types::{parse_structured_response, Itinerary, ResponseValidation, TripRequest},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Issues exactly one generation call per trip request and returns a
/// validated itinerary.
#[derive(Debug, Clone)]
pub struct ItineraryClient {
    provider: Arc<dyn GenerationProvider>,
    model: String,
    validation: ResponseValidation,
}

impl ItineraryClient {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self {
            provider,
            model: ProviderKind::Gemini.default_model().to_string(),
            validation: ResponseValidation::Strict,
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.build_provider()).with_model(config.model.clone())
    }

    /// Build a Gemini-backed client from the environment.
    ///
    /// Fails with [`PlannerError::Config`] when no API key is available.
    ///
    /// [`PlannerError::Config`]: crate::PlannerError::Config
    pub fn from_env() -> Result<Self> {
        let config = PlannerConfig::from_env(ProviderKind::Gemini)?;
        Ok(Self::from_config(&config))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_validation(mut self, validation: ResponseValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, request: &TripRequest) -> Result<Itinerary> {
        let prompt = build_prompt(request);
        let generation = GenerationRequest {
            model: self.model.clone(),
            prompt: prompt.instruction,
            response_mime_type: JSON_MIME_TYPE,
            response_schema: prompt.schema.schema_json().clone(),
            schema_name: prompt.schema.schema_name(),
        };

        info!(
            target: "trip_planner::client",
            provider = self.provider.name(),
            model = %self.model,
            city = request.city(),
            days = request.days(),
            budget = request.budget(),
            "requesting itinerary"
        );
        debug!(target: "trip_planner::client", prompt = %generation.prompt);

        let raw = self.provider.generate(&generation).await.map_err(|err| {
            warn!(target: "trip_planner::client", error = %err, "provider call failed");
            err
        })?;

        debug!(target: "trip_planner::client", response = %raw, "received provider response");

        let itinerary: Itinerary =
            parse_structured_response(&raw, self.validation).map_err(|err| {
                warn!(target: "trip_planner::client", error = %err, "response rejected");
                err
            })?;

        info!(
            target: "trip_planner::client",
            title = %itinerary.trip_title,
            days = itinerary.days.len(),
            "itinerary generated"
        );

        Ok(itinerary)
    }
}
