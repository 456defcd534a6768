//! trip-planner-rs: generate structured, multi-day travel itineraries from a
//! hosted language model.
//!
//! A trip request (city, budget, days) is turned into a prompt plus a JSON
//! schema, sent to the provider in a single call, and the response is parsed
//! and checked against the schema before it becomes an [`Itinerary`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner::{presentation::{render_text, ItineraryView}, ItineraryClient, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ItineraryClient::from_env()?;
//!     let request = TripRequest::new("Paris", 2000, 3)?;
//!
//!     let itinerary = client.generate(&request).await?;
//!     println!("{}", render_text(&ItineraryView::new(&itinerary, request.city())));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod presentation;
pub mod schemas;
pub mod services;
pub mod types;

pub use config::{PlannerConfig, ProviderKind};
pub use crate::core::{GenerationTicket, ItineraryClient, PlannerSession, PlannerStatus, TripForm};
pub use error::{PlannerError, Result};
pub use schemas::{CompletionSchema, SchemaHandle};
pub use services::{GenerationProvider, GenerationRequest};
pub use types::{
    Activity, DailyPlan, Dining, Itinerary, MealRecommendation, MealSlot, ResponseValidation,
    TripRequest,
};

#[cfg(feature = "cli")]
pub mod cli;
