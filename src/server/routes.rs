use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::data::RegionCatalog;
use crate::pokeapi::SpeciesSource;
use crate::server::api::{self, ApiError, CatalogParams};

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SpeciesSource>,
    pub config: Arc<Config>,
    pub regions: Arc<RegionCatalog>,
}

impl AppState {
    pub fn new(source: Arc<dyn SpeciesSource>, config: Config, regions: RegionCatalog) -> Self {
        Self {
            source,
            config: Arc::new(config),
            regions: Arc::new(regions),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/classify", post(classify))
        .route("/api/team/analyze", post(analyze))
        .route("/api/team/build", post(build))
        .route("/api/pokemon", get(catalog))
        .route("/api/pokemon/:id_or_name", get(details))
        .route("/api/regions", get(regions))
        .route("/api/regions/:id", get(region))
        .route("/api/regions/:id/league", get(league))
        .route("/api/regions/:id/league/:trainer", get(trainer))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ApiResult = Result<Response, ApiError>;

async fn health() -> Response {
    Json(api::health_payload()).into_response()
}

async fn classify(body: String) -> ApiResult {
    Ok(Json(api::classify_payload(&body)?).into_response())
}

async fn analyze(State(state): State<AppState>, body: String) -> ApiResult {
    Ok(Json(api::analyze_payload(&body, state.config.synergy)?).into_response())
}

async fn build(State(state): State<AppState>, body: String) -> ApiResult {
    let response = api::build_payload(state.source.as_ref(), &state.config, &body).await?;
    Ok(Json(response).into_response())
}

async fn catalog(State(state): State<AppState>, Query(params): Query<CatalogParams>) -> ApiResult {
    let page = api::catalog_payload(state.source.as_ref(), &state.config, &params).await?;
    Ok(Json(page).into_response())
}

async fn details(State(state): State<AppState>, Path(id_or_name): Path<String>) -> ApiResult {
    let details = api::details_payload(state.source.as_ref(), &state.config, &id_or_name).await?;
    Ok(Json(details).into_response())
}

async fn regions(State(state): State<AppState>) -> Response {
    Json(api::regions_payload(&state.regions)).into_response()
}

async fn region(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(api::region_payload(&state.regions, &id)?).into_response())
}

async fn league(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    Ok(Json(api::league_payload(&state.regions, &id)?).into_response())
}

#[derive(Debug, Deserialize)]
struct TrainerPath {
    id: String,
    trainer: String,
}

async fn trainer(State(state): State<AppState>, Path(path): Path<TrainerPath>) -> ApiResult {
    let analysis = api::trainer_payload(
        state.source.as_ref(),
        &state.config,
        &state.regions,
        &path.id,
        &path.trainer,
    )
    .await?;
    Ok(Json(analysis).into_response())
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
