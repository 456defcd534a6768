pub mod itinerary;
pub mod request;
pub mod response;

pub use itinerary::{Activity, DailyPlan, Dining, Itinerary, MealRecommendation, MealSlot};
pub use request::TripRequest;
pub use response::{deserialize_structured_response, parse_structured_response, ResponseValidation};
