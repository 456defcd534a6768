use crate::types::TripRequest;

/// Raw trip form input plus the inline error shown under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub city: String,
    pub budget: String,
    pub days: String,
    error: Option<String>,
}

impl TripForm {
    pub fn new(
        city: impl Into<String>,
        budget: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            budget: budget.into(),
            days: days.into(),
            error: None,
        }
    }

    /// Validate without touching the inline error.
    pub fn validate(&self) -> crate::Result<TripRequest> {
        TripRequest::parse(&self.city, &self.budget, &self.days)
    }

    /// Submit the form.
    ///
    /// Returns `None` without doing anything while `loading` is set, since the
    /// submit control is disabled during a generation. Otherwise validation
    /// failures are stored as the inline error and a valid request clears it.
    pub fn submit(&mut self, loading: bool) -> Option<TripRequest> {
        if loading {
            return None;
        }

        match self.validate() {
            Ok(request) => {
                self.error = None;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Label for the submit control.
    pub fn submit_label(loading: bool) -> &'static str {
        if loading {
            "Generating..."
        } else {
            "Generate Itinerary"
        }
    }
}
