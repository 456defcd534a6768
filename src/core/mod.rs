pub mod client;
pub mod form;
pub mod session;

pub use client::ItineraryClient;
pub use form::TripForm;
pub use session::{GenerationTicket, PlannerSession, PlannerStatus};
