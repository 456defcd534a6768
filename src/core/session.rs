use tracing::{debug, info};

use crate::{
    core::{client::ItineraryClient, form::TripForm},
    error::Result,
    presentation::ItineraryView,
    types::{Itinerary, TripRequest},
};

/// Identifies one started generation. Only the most recently issued ticket
/// may update the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Top-level state: the current result, loading flag, error message and the
/// city the result belongs to.
#[derive(Debug, Default)]
pub struct PlannerSession {
    itinerary: Option<Itinerary>,
    loading: bool,
    error: Option<String>,
    error_code: Option<&'static str>,
    current_city: String,
    latest: u64,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a generation: drop the previous result and error, mark loading.
    pub fn begin(&mut self, request: &TripRequest) -> GenerationTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        self.error_code = None;
        self.itinerary = None;
        self.current_city = request.city().to_string();

        debug!(target: "trip_planner::session", sequence = self.latest, city = request.city(), "generation started");
        GenerationTicket(self.latest)
    }

    /// Apply an outcome. Returns `false` if the ticket is stale and the
    /// outcome was discarded.
    pub fn finish(&mut self, ticket: GenerationTicket, outcome: Result<Itinerary>) -> bool {
        if ticket.sequence() != self.latest {
            debug!(
                target: "trip_planner::session",
                sequence = ticket.sequence(),
                latest = self.latest,
                "discarding stale generation outcome"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(itinerary) => {
                self.itinerary = Some(itinerary);
                self.error = None;
            }
            Err(err) => {
                info!(target: "trip_planner::session", code = err.error_code(), "generation failed");
                self.itinerary = None;
                self.error = Some(err.user_message());
                self.error_code = Some(err.error_code());
            }
        }
        true
    }

    /// Run one generation for an already validated request.
    pub async fn generate(&mut self, client: &ItineraryClient, request: &TripRequest) -> PlannerStatus {
        let ticket = self.begin(request);
        let outcome = client.generate(request).await;
        self.finish(ticket, outcome);
        self.status()
    }

    /// Submit the form and, if it validates, run a generation.
    ///
    /// A rejected form leaves the session untouched; the message is on the form.
    pub async fn submit(&mut self, form: &mut TripForm, client: &ItineraryClient) -> PlannerStatus {
        let Some(request) = form.submit(self.loading) else {
            return self.status();
        };
        self.generate(client, &request).await
    }

    pub fn status(&self) -> PlannerStatus {
        if self.loading {
            PlannerStatus::Loading
        } else if self.error.is_some() {
            PlannerStatus::Error
        } else if self.itinerary.is_some() {
            PlannerStatus::Success
        } else {
            PlannerStatus::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Machine-readable code of the last failure, alongside [`Self::error`].
    pub fn error_code(&self) -> Option<&'static str> {
        self.error_code
    }

    pub fn current_city(&self) -> &str {
        &self.current_city
    }

    /// Render-ready view of the current result, if any.
    pub fn view(&self) -> Option<ItineraryView> {
        self.itinerary
            .as_ref()
            .map(|itinerary| ItineraryView::new(itinerary, &self.current_city))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    fn itinerary(title: &str) -> Itinerary {
        Itinerary {
            trip_title: title.to_string(),
            total_estimated_cost: 100.0,
            summary: String::new(),
            days: Vec::new(),
        }
    }

    #[test]
    fn test_begin_clears_previous_state() {
        let mut session = PlannerSession::new();
        let request = TripRequest::new("Paris", 1000, 2).unwrap();

        let ticket = session.begin(&request);
        assert!(session.finish(ticket, Ok(itinerary("First"))));
        assert_eq!(session.status(), PlannerStatus::Success);

        let request = TripRequest::new("Rome", 800, 1).unwrap();
        session.begin(&request);
        assert_eq!(session.status(), PlannerStatus::Loading);
        assert!(session.itinerary().is_none());
        assert_eq!(session.current_city(), "Rome");
    }

    #[test]
    fn test_failure_replaces_result_with_message() {
        let mut session = PlannerSession::new();
        let request = TripRequest::new("Paris", 1000, 2).unwrap();

        let ticket = session.begin(&request);
        session.finish(ticket, Ok(itinerary("Old")));

        let ticket = session.begin(&request);
        session.finish(ticket, Err(PlannerError::Transport("network down".to_string())));

        assert_eq!(session.status(), PlannerStatus::Error);
        assert!(session.itinerary().is_none());
        assert!(session.view().is_none());
        assert_eq!(
            session.error(),
            Some("Failed to generate itinerary: network down")
        );
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut session = PlannerSession::new();
        let slow = session.begin(&TripRequest::new("Paris", 1000, 2).unwrap());
        let fast = session.begin(&TripRequest::new("Rome", 800, 1).unwrap());
        assert!(slow < fast);
        assert_eq!(fast.sequence(), slow.sequence() + 1);

        assert!(session.finish(fast, Ok(itinerary("Rome trip"))));
        assert!(!session.finish(slow, Ok(itinerary("Paris trip"))));

        assert_eq!(session.itinerary().unwrap().trip_title, "Rome trip");
        assert_eq!(session.current_city(), "Rome");
    }

    #[test]
    fn test_stale_outcome_does_not_clear_loading() {
        let mut session = PlannerSession::new();
        let first = session.begin(&TripRequest::new("Paris", 1000, 2).unwrap());
        let _second = session.begin(&TripRequest::new("Rome", 800, 1).unwrap());

        assert!(!session.finish(first, Err(PlannerError::Unknown("late".to_string()))));
        assert!(session.is_loading());
        assert_eq!(session.error(), None);
    }
}
