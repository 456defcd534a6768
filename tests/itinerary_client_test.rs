mod common;

use common::{ScriptedProvider, PARIS_RESPONSE};
use std::sync::Arc;
use trip_planner::{
    ItineraryClient, PlannerError, ResponseValidation, TripRequest,
};

fn client_for(provider: &Arc<ScriptedProvider>) -> ItineraryClient {
    ItineraryClient::new(provider.clone())
}

#[tokio::test]
async fn test_round_trip_preserves_every_field() {
    let provider = Arc::new(ScriptedProvider::replying(PARIS_RESPONSE));
    let request = TripRequest::new("Paris", 1500, 1).unwrap();

    let itinerary = client_for(&provider).generate(&request).await.unwrap();

    assert_eq!(itinerary.trip_title, "Paris Adventure");
    assert_eq!(itinerary.total_estimated_cost, 1500.0);
    assert_eq!(itinerary.summary, "A mix of art and cafes");
    assert_eq!(itinerary.days.len(), 1);

    let day = &itinerary.days[0];
    assert_eq!(day.day, 1);
    assert_eq!(day.theme, "Historic Core");
    assert_eq!(day.activities[0].name, "Louvre Museum");
    assert_eq!(day.activities[0].description, "World-class art");
    assert_eq!(day.activities[0].estimated_cost, 20.0);
    assert_eq!(day.dining.breakfast.name, "Cafe de Flore");
    assert_eq!(day.dining.breakfast.description, "Coffee and croissant");
    assert_eq!(day.dining.breakfast.estimated_cost, 10.0);
    assert_eq!(day.dining.lunch.name, "Le Bistro");
    assert_eq!(day.dining.lunch.estimated_cost, 25.0);
    assert_eq!(day.dining.dinner.name, "Chez Lucien");
    assert_eq!(day.dining.dinner.description, "Fine dining");
    assert_eq!(day.dining.dinner.estimated_cost, 60.0);

    let reserialized = serde_json::to_value(&itinerary).unwrap();
    let original: serde_json::Value = serde_json::from_str(PARIS_RESPONSE).unwrap();
    assert_eq!(reserialized, original);
}

#[tokio::test]
async fn test_exactly_one_call_with_schema_and_prompt() {
    let provider = Arc::new(ScriptedProvider::replying(PARIS_RESPONSE));
    let request = TripRequest::new("Paris", 1500, 1).unwrap();

    client_for(&provider).generate(&request).await.unwrap();

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.model, "gemini-2.5-flash");
    assert_eq!(call.response_mime_type, "application/json");
    assert_eq!(call.schema_name, "itinerary");
    assert_eq!(call.response_schema["type"], "object");
    assert!(call.prompt.contains("a trip to Paris for 1 days"));
    assert!(call.prompt.contains("$1500"));
}

#[tokio::test]
async fn test_model_override_is_sent() {
    let provider = Arc::new(ScriptedProvider::replying(PARIS_RESPONSE));
    let request = TripRequest::new("Paris", 1500, 1).unwrap();

    client_for(&provider)
        .with_model("gemini-2.0-flash")
        .generate(&request)
        .await
        .unwrap();

    assert_eq!(provider.calls()[0].model, "gemini-2.0-flash");
}

#[tokio::test]
async fn test_truncated_response_is_parse_error() {
    let truncated = &PARIS_RESPONSE[..PARIS_RESPONSE.len() - 40];
    let provider = Arc::new(ScriptedProvider::replying(truncated));
    let request = TripRequest::new("Paris", 1500, 1).unwrap();

    let err = client_for(&provider).generate(&request).await.unwrap_err();
    assert!(matches!(err, PlannerError::Parse(_)));
    assert!(err
        .user_message()
        .starts_with("Failed to generate itinerary:"));
}

#[tokio::test]
async fn test_prose_wrapped_response_is_parse_error() {
    let wrapped = format!("Sure! Here's your plan:\n{}", PARIS_RESPONSE);
    let provider = Arc::new(ScriptedProvider::replying(wrapped));
    let request = TripRequest::new("Paris", 1500, 1).unwrap();

    let err = client_for(&provider).generate(&request).await.unwrap_err();
    assert!(matches!(err, PlannerError::Parse(_)));
}

#[tokio::test]
async fn test_missing_meal_is_parse_error_in_both_modes() {
    let mut document: serde_json::Value = serde_json::from_str(PARIS_RESPONSE).unwrap();
    document["days"][0]["dining"]
        .as_object_mut()
        .unwrap()
        .remove("lunch");
    let provider = Arc::new(ScriptedProvider::replying(document.to_string()));
    let request = TripRequest::new("Paris", 1500, 1).unwrap();

    for validation in [ResponseValidation::Strict, ResponseValidation::SerdeOnly] {
        let err = client_for(&provider)
            .with_validation(validation)
            .generate(&request)
            .await
            .unwrap_err();
        match err {
            PlannerError::Parse(detail) => assert!(detail.contains("lunch"), "{detail}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_provider_failure_is_transport_error() {
    let provider = Arc::new(ScriptedProvider::failing(PlannerError::Transport(
        "HTTP 401 Unauthorized error: API key not valid.".to_string(),
    )));
    let request = TripRequest::new("Paris", 1500, 1).unwrap();

    let err = client_for(&provider).generate(&request).await.unwrap_err();
    assert_eq!(
        err.user_message(),
        "Failed to generate itinerary: HTTP 401 Unauthorized error: API key not valid."
    );
    assert_eq!(provider.calls().len(), 1, "no retry after failure");
}

#[tokio::test]
async fn test_day_count_mismatch_is_not_rejected() {
    let provider = Arc::new(ScriptedProvider::replying(PARIS_RESPONSE));
    let request = TripRequest::new("Paris", 1500, 4).unwrap();

    let itinerary = client_for(&provider).generate(&request).await.unwrap();
    assert_eq!(itinerary.days.len(), 1);
    assert_ne!(itinerary.itemised_cost(), itinerary.total_estimated_cost);
}
