//! # sahayak-server
//!
//! HTTP surface for the query pipeline and the volunteer coordination
//! registry. State is built once at startup; the prompt templates are
//! read-only afterwards and the registry lives behind an async `RwLock`.

pub mod config;
pub mod errors;

use crate::config::Config;
use crate::errors::AppError;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use sahayak::impact::{CompletionRecord, ImpactReport, ImpactTracker, Outcomes};
use sahayak::matching::{self, MatchResult, Opportunity, Volunteer};
use sahayak::providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider};
use sahayak::{validation, AssistClient, AssistClientBuilder, Domain, PromptStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::info;

/// In-memory registry of volunteers, opportunities, and completions.
#[derive(Debug, Default)]
pub struct Registry {
    pub volunteers: Vec<Volunteer>,
    pub opportunities: Vec<Opportunity>,
    pub impact: ImpactTracker,
}

/// The shared application state.
///
/// Holds the `AssistClient` (read-only after startup) and the coordination
/// registry, shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub assist_client: Arc<AssistClient>,
    pub registry: Arc<RwLock<Registry>>,
}

/// Builds the shared application state from the configuration.
///
/// This is where a missing `GEMINI_API_KEY` or template file aborts
/// startup, before anything touches the network.
pub async fn build_app_state(config: Config) -> anyhow::Result<AppState> {
    let timeout = Duration::from_secs(config.upstream_timeout_secs);

    let ai_provider: Box<dyn AiProvider> = match config.ai_provider.as_str() {
        "gemini" => Box::new(GeminiProvider::new(
            config.ai_api_url.clone(),
            config.ai_api_key.clone().unwrap_or_default(),
            timeout,
        )?),
        "local" => Box::new(LocalAiProvider::new(
            config.ai_api_url.clone(),
            config.ai_api_key.clone(),
            config.ai_model.clone(),
            timeout,
        )?),
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported AI provider: {}",
                config.ai_provider
            ))
        }
    };

    let store = PromptStore::load(&config.prompts_dir)?;

    let assist_client = AssistClientBuilder::new()
        .ai_provider(ai_provider)
        .prompt_store(store)
        .build()?;

    Ok(AppState {
        assist_client: Arc::new(assist_client),
        registry: Arc::new(RwLock::new(Registry::default())),
    })
}

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/ask", post(ask_handler))
        .route("/volunteers", post(add_volunteer_handler))
        .route("/volunteers/{id}/matches", get(volunteer_matches_handler))
        .route("/opportunities", post(add_opportunity_handler))
        .route("/completions", post(completion_handler))
        .route("/impact", get(impact_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

/// The root handler.
async fn root() -> &'static str {
    "sahayak server is running."
}

/// The health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// The request body for the `/ask` endpoint.
#[derive(Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// The response body for the `/ask` endpoint.
#[derive(Serialize)]
pub struct AskResponse {
    pub domain: Domain,
    pub answer: String,
}

/// The handler for the `/ask` endpoint: one pass through the pipeline.
async fn ask_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    info!("Received query: '{}'", payload.query);

    let answer = app_state.assist_client.answer(&payload.query).await?;

    Ok(Json(AskResponse {
        domain: answer.domain,
        answer: answer.text,
    }))
}

/// The response body for a volunteer registration: the stored id plus the
/// immediate recommendations, mirroring the welcome flow.
#[derive(Serialize)]
pub struct RegisterVolunteerResponse {
    pub id: String,
    pub matches: Vec<MatchResult>,
}

async fn add_volunteer_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<Volunteer>,
) -> Result<Json<RegisterVolunteerResponse>, AppError> {
    let errors = validation::validate_volunteer(&payload);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let volunteer = validation::sanitize_volunteer(payload);

    let mut registry = app_state.registry.write().await;
    let matches = matching::find_matches(&volunteer, &registry.opportunities);
    info!(
        "registered volunteer {} with {} matches",
        volunteer.name,
        matches.len()
    );
    let id = volunteer.id.clone();
    registry.volunteers.push(volunteer);

    Ok(Json(RegisterVolunteerResponse { id, matches }))
}

/// The response body for an opportunity posting: the stored id plus the
/// volunteers worth contacting.
#[derive(Serialize)]
pub struct PostOpportunityResponse {
    pub id: String,
    pub suitable_volunteers: Vec<MatchResult>,
}

async fn add_opportunity_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<Opportunity>,
) -> Result<Json<PostOpportunityResponse>, AppError> {
    let errors = validation::validate_opportunity(&payload);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let opportunity = validation::sanitize_opportunity(payload);

    let mut registry = app_state.registry.write().await;
    let suitable_volunteers = matching::find_volunteers(&opportunity, &registry.volunteers);
    info!(
        "posted opportunity '{}' with {} suitable volunteers",
        opportunity.title,
        suitable_volunteers.len()
    );
    let id = opportunity.id.clone();
    registry.opportunities.push(opportunity);

    Ok(Json(PostOpportunityResponse {
        id,
        suitable_volunteers,
    }))
}

async fn volunteer_matches_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let registry = app_state.registry.read().await;
    let volunteer = registry
        .volunteers
        .iter()
        .find(|v| v.id == id)
        .ok_or_else(|| AppError::NotFound(format!("volunteer `{id}`")))?;

    Ok(Json(matching::find_matches(
        volunteer,
        &registry.opportunities,
    )))
}

/// The request body for the `/completions` endpoint.
#[derive(Deserialize)]
pub struct CompletionRequest {
    pub volunteer_id: String,
    pub opportunity_id: String,
    pub outcomes: Outcomes,
}

async fn completion_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CompletionRequest>,
) -> Result<Json<CompletionRecord>, AppError> {
    let mut registry = app_state.registry.write().await;

    let volunteer = registry
        .volunteers
        .iter()
        .find(|v| v.id == payload.volunteer_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("volunteer `{}`", payload.volunteer_id)))?;
    let opportunity = registry
        .opportunities
        .iter()
        .find(|o| o.id == payload.opportunity_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("opportunity `{}`", payload.opportunity_id)))?;

    let record = registry
        .impact
        .record_completion(&volunteer, &opportunity, payload.outcomes);

    Ok(Json(record))
}

/// Query parameters for the `/impact` endpoint.
#[derive(Deserialize)]
pub struct ImpactParams {
    pub days: Option<i64>,
}

async fn impact_handler(
    State(app_state): State<AppState>,
    Query(params): Query<ImpactParams>,
) -> Json<ImpactReport> {
    let registry = app_state.registry.read().await;
    Json(registry.impact.generate_report(params.days.unwrap_or(30)))
}
