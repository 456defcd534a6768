#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;
use trip_planner::{GenerationProvider, GenerationRequest, PlannerError};

pub const PARIS_RESPONSE: &str = r#"{"tripTitle":"Paris Adventure","totalEstimatedCost":1500,"summary":"A mix of art and cafes","days":[{"day":1,"theme":"Historic Core","activities":[{"name":"Louvre Museum","description":"World-class art","estimated_cost":20}],"dining":{"breakfast":{"name":"Cafe de Flore","description":"Coffee and croissant","estimated_cost":10},"lunch":{"name":"Le Bistro","description":"French classics","estimated_cost":25},"dinner":{"name":"Chez Lucien","description":"Fine dining","estimated_cost":60}}}]}"#;

/// Provider that answers every call with a fixed reply and records requests.
#[derive(Debug)]
pub struct ScriptedProvider {
    reply: Result<String, PlannerError>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: PlannerError) -> Self {
        Self {
            reply: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, PlannerError> {
        self.calls.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

fn meal(name: &str, cost: u32) -> Value {
    json!({"name": name, "description": format!("{name} special"), "estimated_cost": cost})
}

/// A well-formed itinerary document with `days` day entries.
pub fn itinerary_json(days: u32) -> String {
    let plans: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "day": day,
                "theme": format!("Theme {day}"),
                "activities": [
                    {"name": format!("Sight {day}"), "description": "Worth it", "estimated_cost": 15},
                ],
                "dining": {
                    "breakfast": meal(&format!("Breakfast {day}"), 8),
                    "lunch": meal(&format!("Lunch {day}"), 18),
                    "dinner": meal(&format!("Dinner {day}"), 40),
                }
            })
        })
        .collect();

    json!({
        "tripTitle": format!("{days} Days Away"),
        "totalEstimatedCost": 250 * days,
        "summary": "Generated for tests",
        "days": plans,
    })
    .to_string()
}
