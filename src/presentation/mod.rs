//! Read-only views of a generated itinerary.
//!
//! Nothing here validates or mutates the itinerary; fields are shown exactly
//! as the model returned them.

pub mod maps;
pub mod text;

pub use maps::maps_search_url;
pub use text::render_text;

use serde::Serialize;

use crate::types::{Activity, DailyPlan, Itinerary, MealRecommendation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryView {
    pub title: String,
    pub summary: String,
    pub total_cost: String,
    pub days: Vec<DayView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    pub day: u32,
    pub theme: String,
    pub activities: Vec<ActivityCard>,
    pub meals: Vec<MealCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub cost: String,
    pub map_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealCard {
    pub meal: &'static str,
    pub name: String,
    pub description: String,
    pub cost: String,
}

/// Dollar amount as the model gave it (`20`, `12.5`).
pub fn format_cost(amount: f64) -> String {
    format!("${}", amount)
}

impl ItineraryView {
    /// `city` is the destination the user asked for; it feeds the map links.
    pub fn new(itinerary: &Itinerary, city: &str) -> Self {
        Self {
            title: itinerary.trip_title.clone(),
            summary: itinerary.summary.clone(),
            total_cost: format_cost(itinerary.total_estimated_cost),
            days: itinerary
                .days
                .iter()
                .map(|plan| DayView::new(plan, city))
                .collect(),
        }
    }
}

impl DayView {
    fn new(plan: &DailyPlan, city: &str) -> Self {
        Self {
            day: plan.day,
            theme: plan.theme.clone(),
            activities: plan
                .activities
                .iter()
                .map(|activity| ActivityCard::new(activity, city))
                .collect(),
            meals: plan
                .dining
                .meals()
                .into_iter()
                .map(|(slot, meal)| MealCard::new(slot.label(), meal))
                .collect(),
        }
    }

    pub fn heading(&self) -> String {
        format!("Day {}: {}", self.day, self.theme)
    }
}

impl ActivityCard {
    fn new(activity: &Activity, city: &str) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            cost: format_cost(activity.estimated_cost),
            map_url: maps_search_url(&activity.name, city),
        }
    }
}

impl MealCard {
    fn new(meal: &'static str, recommendation: &MealRecommendation) -> Self {
        Self {
            meal,
            name: recommendation.name.clone(),
            description: recommendation.description.clone(),
            cost: format_cost(recommendation.estimated_cost),
        }
    }
}
