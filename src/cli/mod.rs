use crate::{
    presentation::render_text, ItineraryClient, PlannerConfig, PlannerError, PlannerSession,
    PlannerStatus, ProviderKind, ResponseValidation, TripForm,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn command() -> Command {
    Command::new("trip-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a day-by-day travel itinerary with an LLM")
        .arg(
            Arg::new("city")
                .short('c')
                .long("city")
                .value_name("CITY")
                .help("Destination city, e.g. \"Paris, France\"")
                .default_value(""),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("USD")
                .help("Approximate total budget in USD")
                .default_value(""),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("COUNT")
                .help("Number of days")
                .default_value(""),
        )
        .arg(
            Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("PROVIDER")
                .help("Model provider: gemini or openrouter")
                .default_value("gemini"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Model identifier (or set TRIP_PLANNER_MODEL)"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Provider API key (or set GEMINI_API_KEY / OPENROUTER_API_KEY)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Provider base URL (or set GEMINI_BASE_URL / OPENROUTER_BASE_URL)"),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .action(ArgAction::SetTrue)
                .help("Skip the JSON Schema check and rely on typed parsing only"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the itinerary (or error) as JSON"),
        )
}

/// Resolve configuration from flags first, then the environment.
fn load_config(matches: &ArgMatches) -> Result<PlannerConfig, PlannerError> {
    let provider: ProviderKind = matches
        .get_one::<String>("provider")
        .map(|value| value.parse::<ProviderKind>())
        .transpose()?
        .unwrap_or_default();

    let cli_key = matches.get_one::<String>("api-key").cloned();
    let mut config = PlannerConfig::from_lookup(provider, |name| {
        let is_key_var = provider.api_key_vars().iter().any(|var| *var == name);
        if is_key_var && cli_key.is_some() {
            cli_key.clone()
        } else {
            env::var(name).ok()
        }
    })?;

    if let Some(model) = matches.get_one::<String>("model") {
        config = config.with_model(model.clone());
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(base_url.clone());
    }
    Ok(config)
}

fn report_error(message: &str, code: &str, as_json: bool) {
    if as_json {
        println!(
            "{}",
            serde_json::json!({ "error": { "code": code, "message": message } })
        );
    } else {
        eprintln!("{}", message);
    }
}

/// CLI entry point for the trip-planner tool
pub async fn run() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let matches = command().get_matches();
    let as_json = matches.get_flag("json");

    // A missing credential stops the tool before any input is considered.
    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(err) => {
            error!("startup failed: {}", err);
            report_error(&err.user_message(), err.error_code(), as_json);
            return ExitCode::FAILURE;
        }
    };

    let validation = if matches.get_flag("lenient") {
        ResponseValidation::SerdeOnly
    } else {
        ResponseValidation::Strict
    };
    let client = ItineraryClient::from_config(&config).with_validation(validation);

    info!("Using provider: {}", config.provider);
    info!("Using model: {}", client.model());

    let field = |name: &str| matches.get_one::<String>(name).cloned().unwrap_or_default();
    let mut form = TripForm::new(field("city"), field("budget"), field("days"));
    let mut session = PlannerSession::new();

    match session.submit(&mut form, &client).await {
        PlannerStatus::Success => {
            let Some(itinerary) = session.itinerary() else {
                return ExitCode::FAILURE;
            };
            if as_json {
                match serde_json::to_string_pretty(itinerary) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        let err = PlannerError::Unknown(err.to_string());
                        report_error(&err.user_message(), err.error_code(), true);
                        return ExitCode::FAILURE;
                    }
                }
            } else if let Some(view) = session.view() {
                println!("{}", render_text(&view));
            }
            ExitCode::SUCCESS
        }
        PlannerStatus::Error => {
            let message = session.error().unwrap_or(crate::error::UNEXPECTED_ERROR_MESSAGE);
            let code = session.error_code().unwrap_or("UNKNOWN_ERROR");
            report_error(message, code, as_json);
            ExitCode::FAILURE
        }
        PlannerStatus::Idle | PlannerStatus::Loading => {
            let message = form
                .error()
                .unwrap_or(crate::error::UNEXPECTED_ERROR_MESSAGE);
            report_error(message, "INPUT_VALIDATION_ERROR", as_json);
            ExitCode::FAILURE
        }
    }
}
