use crate::{
    schemas::{CompletionSchema, SchemaHandle},
    types::{Itinerary, TripRequest},
};

/// Instruction text plus the output-shape constraint sent alongside it.
#[derive(Debug, Clone)]
pub struct GenerationPrompt {
    pub instruction: String,
    pub schema: &'static SchemaHandle,
}

/// Build the itinerary instruction for a validated trip request.
pub fn build_prompt(request: &TripRequest) -> GenerationPrompt {
    GenerationPrompt {
        instruction: itinerary_instruction(request),
        schema: Itinerary::schema(),
    }
}

fn itinerary_instruction(request: &TripRequest) -> String {
    format!(
        "You are an expert travel planner. Create a detailed, day-by-day travel itinerary for a trip to {city} for {days} days with a total budget of approximately ${budget} USD.

Please provide the output in a valid JSON format that adheres to the provided schema.

The itinerary should be creative and practical, balancing popular attractions with unique local experiences. For each day, provide a theme, a list of activities, and dining recommendations for breakfast, lunch, and dinner. Include estimated costs for activities and meals to help stay within the overall budget. The total estimated cost should be a reasonable approximation based on the suggestions.

Do not include any introductory text or markdown formatting, just the raw JSON object.",
        city = request.city(),
        days = request.days(),
        budget = request.budget(),
    )
}
