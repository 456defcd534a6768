use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::OnceLock;

use crate::schemas::{inline_root_schema, CompletionSchema, SchemaHandle};

/// A complete multi-day trip plan produced by a single generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Itinerary {
    /// A creative and exciting title for the trip.
    #[serde(rename = "tripTitle")]
    pub trip_title: String,
    /// The total estimated cost for the entire trip in USD.
    #[serde(rename = "totalEstimatedCost", serialize_with = "serialize_cost")]
    #[schemars(with = "f64")]
    pub total_estimated_cost: f64,
    /// A brief, engaging summary of the trip plan.
    pub summary: String,
    /// Day-by-day plans in the order they should be followed.
    pub days: Vec<DailyPlan>,
}

/// One day's theme, activities, and dining recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyPlan {
    /// The day number of the itinerary.
    pub day: u32,
    /// A theme for the day's activities (e.g., 'Historical Exploration', 'Relaxing Beach Day').
    pub theme: String,
    /// Activities or attractions for the day.
    pub activities: Vec<Activity>,
    /// Breakfast, lunch, and dinner recommendations for the day.
    pub dining: Dining,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    /// Name of the activity or attraction.
    pub name: String,
    /// A short description of the activity.
    pub description: String,
    /// Estimated cost for this activity in USD.
    #[serde(serialize_with = "serialize_cost")]
    #[schemars(with = "f64")]
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dining {
    /// Restaurant or cafe for breakfast.
    pub breakfast: MealRecommendation,
    /// Restaurant or cafe for lunch.
    pub lunch: MealRecommendation,
    /// Restaurant for dinner.
    pub dinner: MealRecommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MealRecommendation {
    /// Name of the restaurant or cafe.
    pub name: String,
    /// Description of the place and what to eat.
    pub description: String,
    /// Estimated cost for the meal in USD.
    #[serde(serialize_with = "serialize_cost")]
    #[schemars(with = "f64")]
    pub estimated_cost: f64,
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole amounts as JSON integers so `10` from the model stays `10`.
fn serialize_cost<S>(cost: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if cost.fract() == 0.0 && cost.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*cost as i64)
    } else {
        serializer.serialize_f64(*cost)
    }
}

/// The three fixed dining slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl Dining {
    /// Meals in serving order: breakfast, lunch, dinner.
    pub fn meals(&self) -> [(MealSlot, &MealRecommendation); 3] {
        [
            (MealSlot::Breakfast, &self.breakfast),
            (MealSlot::Lunch, &self.lunch),
            (MealSlot::Dinner, &self.dinner),
        ]
    }
}

impl DailyPlan {
    pub fn itemised_cost(&self) -> f64 {
        let activities: f64 = self.activities.iter().map(|a| a.estimated_cost).sum();
        let meals: f64 = self
            .dining
            .meals()
            .iter()
            .map(|(_, meal)| meal.estimated_cost)
            .sum();
        activities + meals
    }
}

impl Itinerary {
    /// Sum of every activity and meal estimate.
    ///
    /// The model's `total_estimated_cost` is advisory and is not expected to
    /// match this figure.
    pub fn itemised_cost(&self) -> f64 {
        self.days.iter().map(DailyPlan::itemised_cost).sum()
    }
}

impl CompletionSchema for Itinerary {
    fn schema() -> &'static SchemaHandle {
        static HANDLE: OnceLock<SchemaHandle> = OnceLock::new();
        HANDLE.get_or_init(|| {
            SchemaHandle::from_root_schema::<Self>(
                "itinerary",
                "Itinerary",
                inline_root_schema::<Self>(),
            )
        })
    }
}
