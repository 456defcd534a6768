use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";
pub const INVALID_NUMBERS_MESSAGE: &str = "Please enter valid numbers for budget and days.";

/// Validated trip parameters handed to the itinerary client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    city: String,
    budget: u64,
    days: u32,
}

impl TripRequest {
    /// Build a request, applying the same rules as the trip form.
    pub fn new(city: impl Into<String>, budget: u64, days: u32) -> Result<Self> {
        let city = city.into();
        if city.trim().is_empty() {
            return Err(PlannerError::InputValidation(
                MISSING_FIELDS_MESSAGE.to_string(),
            ));
        }
        if budget == 0 || days == 0 {
            return Err(PlannerError::InputValidation(
                INVALID_NUMBERS_MESSAGE.to_string(),
            ));
        }
        Ok(Self { city, budget, days })
    }

    /// Parse raw form text. Blank fields are reported before bad numbers.
    pub fn parse(city: &str, budget: &str, days: &str) -> Result<Self> {
        if city.trim().is_empty() || budget.trim().is_empty() || days.trim().is_empty() {
            return Err(PlannerError::InputValidation(
                MISSING_FIELDS_MESSAGE.to_string(),
            ));
        }

        let invalid = || PlannerError::InputValidation(INVALID_NUMBERS_MESSAGE.to_string());
        let budget = parse_whole_number(budget).ok_or_else(invalid)?;
        let days = parse_whole_number(days)
            .and_then(|days| u32::try_from(days).ok())
            .ok_or_else(invalid)?;

        Self::new(city, budget, days)
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Approximate total budget in USD.
    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn days(&self) -> u32 {
        self.days
    }
}

/// Read a numeric form field: any finite number, truncated toward zero, that
/// leaves a whole value of at least one. `"1500.50"` is 1500, `"2.5"` is 2.
fn parse_whole_number(text: &str) -> Option<u64> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let whole = value.trunc();
    if whole < 1.0 || whole >= u64::MAX as f64 {
        return None;
    }
    Some(whole as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: PlannerError) -> String {
        match err {
            PlannerError::InputValidation(message) => message,
            other => panic!("expected input validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_keeps_city_verbatim() {
        let request = TripRequest::parse("Paris, France", "2000", " 7 ").unwrap();
        assert_eq!(request.city(), "Paris, France");
        assert_eq!(request.budget(), 2000);
        assert_eq!(request.days(), 7);
    }

    #[test]
    fn test_blank_fields_rejected_first() {
        let err = TripRequest::parse("   ", "abc", "0").unwrap_err();
        assert_eq!(message(err), MISSING_FIELDS_MESSAGE);

        let err = TripRequest::parse("Rome", "", "3").unwrap_err();
        assert_eq!(message(err), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_non_positive_and_non_numeric_rejected() {
        for (budget, days) in [
            ("0", "3"),
            ("-5", "3"),
            ("0.5", "3"),
            ("1000", "0"),
            ("ten", "3"),
            ("12abc", "3"),
            ("inf", "3"),
            ("1000", "NaN"),
            ("1000", "5000000000"),
        ] {
            let err = TripRequest::parse("Rome", budget, days).unwrap_err();
            assert_eq!(message(err), INVALID_NUMBERS_MESSAGE, "{budget}/{days}");
        }
    }

    #[test]
    fn test_decimal_and_exponent_numbers_are_truncated() {
        let request = TripRequest::parse("Paris", "1500.50", "3").unwrap();
        assert_eq!(request.budget(), 1500);
        assert_eq!(request.days(), 3);

        let request = TripRequest::parse("Paris", "1000", "2.5").unwrap();
        assert_eq!(request.days(), 2);

        let request = TripRequest::parse("Paris", "1e3", "1.0").unwrap();
        assert_eq!(request.budget(), 1000);
        assert_eq!(request.days(), 1);
    }

    #[test]
    fn test_new_validates() {
        assert!(TripRequest::new("Lisbon", 800, 3).is_ok());
        assert!(TripRequest::new("", 800, 3).is_err());
        assert!(TripRequest::new("Lisbon", 0, 3).is_err());
    }
}
