use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    analyze_team, classify, BaseStats, Entity, EntityInput, Role, SynergyMode, TeamReport,
    MAX_TEAM_SIZE,
};
use crate::coach::{analyze_trainer, build_team, TeamBuild, TrainerAnalysis};
use crate::config::Config;
use crate::data::{League, PokemonType, Region, RegionCatalog};
use crate::dex::{load_details, load_page, CatalogPage, CatalogQuery, PokemonDetails, SortOrder};
use crate::pokeapi::{SourceError, SpeciesSource};

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub messages: Vec<String>,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            messages: vec![message.into()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub errors: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("validation failed")]
    Validation(Vec<ValidationIssue>),
    #[error("{0}")]
    NotFound(String),
    #[error("upstream data source failed: {0}")]
    Upstream(String),
}

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(subject) => Self::NotFound(format!("'{subject}' was not found")),
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(errors) => {
                let body = ValidationErrorResponse {
                    status: "error",
                    message: "Validation failed",
                    errors,
                };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            Self::Parse(err) => (StatusCode::BAD_REQUEST, format!("Invalid request body: {err}")),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Upstream(msg) => {
                tracing::warn!("upstream failure: {msg}");
                (StatusCode::BAD_GATEWAY, msg)
            }
        };
        let body = ErrorBody {
            status: "error",
            message,
        };
        (status, Json(body)).into_response()
    }
}

fn validation(errors: Vec<ValidationIssue>) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

pub fn health_payload() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "service": "pokecoach-api",
        "version": env!("CARGO_PKG_VERSION")
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub status: &'static str,
    pub role: Role,
    pub label: &'static str,
    pub offensive: u32,
    pub defensive: u32,
}

pub fn classify_payload(body: &str) -> Result<ClassifyResponse, ApiError> {
    let stats: BaseStats = serde_json::from_str(body)?;
    let role = classify(&stats);
    Ok(ClassifyResponse {
        status: "ok",
        role,
        label: role.label(),
        offensive: stats.offensive(),
        defensive: stats.defensive(),
    })
}

fn synergy_mode(seed: Option<u64>, default: SynergyMode) -> SynergyMode {
    seed.map(SynergyMode::Seeded).unwrap_or(default)
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub members: Vec<EntityInput>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    pub synergy_mode: String,
    pub members: Vec<Entity>,
    pub report: TeamReport,
}

fn team_size_issue(field: &str, count: usize) -> Option<ValidationIssue> {
    if (1..=MAX_TEAM_SIZE).contains(&count) {
        None
    } else {
        Some(ValidationIssue::new(
            field,
            format!("must contain between 1 and {MAX_TEAM_SIZE} entries"),
        ))
    }
}

pub fn analyze_payload(body: &str, default_mode: SynergyMode) -> Result<AnalyzeResponse, ApiError> {
    let request: AnalyzeRequest = serde_json::from_str(body)?;

    let mut errors: Vec<ValidationIssue> = Vec::new();
    errors.extend(team_size_issue("members", request.members.len()));
    let mut members = Vec::with_capacity(request.members.len());
    for (index, input) in request.members.into_iter().enumerate() {
        match Entity::try_from(input) {
            Ok(member) => members.push(member),
            Err(err) => errors.push(ValidationIssue::new(format!("members[{index}]"), err.to_string())),
        }
    }
    validation(errors)?;

    let mode = synergy_mode(request.seed, default_mode);
    let report = analyze_team(&members, mode).map_err(|err| {
        ApiError::Validation(vec![ValidationIssue::new("members", err.to_string())])
    })?;
    Ok(AnalyzeResponse {
        status: "ok",
        synergy_mode: mode.to_string(),
        members,
        report,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildRequest {
    #[serde(default)]
    pub pokemon: Vec<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildResponse {
    pub status: &'static str,
    pub synergy_mode: String,
    #[serde(flatten)]
    pub build: TeamBuild,
}

pub fn parse_build_request(body: &str) -> Result<BuildRequest, ApiError> {
    let request: BuildRequest = serde_json::from_str(body)?;
    let mut errors: Vec<ValidationIssue> = Vec::new();
    errors.extend(team_size_issue("pokemon", request.pokemon.len()));
    for (index, query) in request.pokemon.iter().enumerate() {
        if query.trim().is_empty() {
            errors.push(ValidationIssue::new(format!("pokemon[{index}]"), "must not be empty"));
        }
    }
    validation(errors)?;
    Ok(request)
}

pub async fn build_payload(
    source: &dyn SpeciesSource,
    config: &Config,
    body: &str,
) -> Result<BuildResponse, ApiError> {
    let request = parse_build_request(body)?;
    let mode = synergy_mode(request.seed, config.synergy);
    let build = build_team(source, &request.pokemon, mode, config.fetch_concurrency).await;
    Ok(BuildResponse {
        status: "ok",
        synergy_mode: mode.to_string(),
        build,
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub type_filter: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

pub fn catalog_query(params: &CatalogParams) -> Result<CatalogQuery, ApiError> {
    let mut errors: Vec<ValidationIssue> = Vec::new();

    let type_filter = match params.type_filter.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(raw) => match raw.parse::<PokemonType>() {
            Ok(tag) => Some(tag),
            Err(err) => {
                errors.push(ValidationIssue::new("type", err.to_string()));
                None
            }
        },
    };
    let sort = match params.sort.as_deref() {
        None => SortOrder::default(),
        Some(raw) => raw.parse::<SortOrder>().unwrap_or_else(|err| {
            errors.push(ValidationIssue::new("sort", err.to_string()));
            SortOrder::default()
        }),
    };
    let page = match params.page.as_deref().map(str::trim) {
        None | Some("") => 1,
        Some(raw) => raw.parse::<usize>().unwrap_or_else(|_| {
            errors.push(ValidationIssue::new("page", format!("'{raw}' is not a page number")));
            1
        }),
    };
    validation(errors)?;

    Ok(CatalogQuery {
        search: params.search.clone(),
        type_filter,
        sort,
        page,
    })
}

pub async fn catalog_payload(
    source: &dyn SpeciesSource,
    config: &Config,
    params: &CatalogParams,
) -> Result<CatalogPage, ApiError> {
    let query = catalog_query(params)?;
    Ok(load_page(source, &query, config.pool_limit, config.fetch_concurrency).await?)
}

pub async fn details_payload(
    source: &dyn SpeciesSource,
    config: &Config,
    id_or_name: &str,
) -> Result<PokemonDetails, ApiError> {
    Ok(load_details(source, id_or_name, &config.languages).await?)
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionSummary {
    pub id: String,
    pub name: String,
    pub generation: u8,
    pub total_pokemon: u32,
    pub has_league: bool,
}

pub fn regions_payload(catalog: &RegionCatalog) -> serde_json::Value {
    let regions: Vec<RegionSummary> = catalog
        .regions
        .iter()
        .map(|r| RegionSummary {
            id: r.id.clone(),
            name: r.name.clone(),
            generation: r.generation,
            total_pokemon: r.total_pokemon,
            has_league: catalog.league(&r.id).is_some(),
        })
        .collect();
    serde_json::json!({
        "data_version": catalog.data_version,
        "regions": regions
    })
}

pub fn region_payload<'a>(catalog: &'a RegionCatalog, id: &str) -> Result<&'a Region, ApiError> {
    catalog
        .region(id)
        .ok_or_else(|| ApiError::NotFound(format!("region '{id}' was not found")))
}

pub fn league_payload<'a>(catalog: &'a RegionCatalog, id: &str) -> Result<&'a League, ApiError> {
    region_payload(catalog, id)?;
    catalog
        .league(id)
        .ok_or_else(|| ApiError::NotFound(format!("no league data for region '{id}'")))
}

pub async fn trainer_payload(
    source: &dyn SpeciesSource,
    config: &Config,
    catalog: &RegionCatalog,
    region_id: &str,
    trainer: &str,
) -> Result<TrainerAnalysis, ApiError> {
    let league = league_payload(catalog, region_id)?;
    analyze_trainer(source, league, trainer, config.synergy, config.fetch_concurrency)
        .await
        .map_err(|err| ApiError::NotFound(err.to_string()))
}
