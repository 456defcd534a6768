use super::ItineraryView;

/// Render the itinerary for a terminal.
pub fn render_text(view: &ItineraryView) -> String {
    let mut lines = Vec::new();

    lines.push(format!("=== {} ===", view.title));
    lines.push(view.summary.clone());
    lines.push(format!("Total Estimated Cost: {}", view.total_cost));

    for day in &view.days {
        lines.push(String::new());
        lines.push(format!("--- {} ---", day.heading()));

        lines.push("Activities".to_string());
        if day.activities.is_empty() {
            lines.push("  (none planned)".to_string());
        }
        for activity in &day.activities {
            lines.push(format!("  * {} ({})", activity.name, activity.cost));
            lines.push(format!("    {}", activity.description));
            lines.push(format!("    View on Map: {}", activity.map_url));
        }

        lines.push("Dining".to_string());
        for meal in &day.meals {
            lines.push(format!("  {}: {} ({})", meal.meal, meal.name, meal.cost));
            lines.push(format!("    {}", meal.description));
        }
    }

    lines.join("\n")
}
