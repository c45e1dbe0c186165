//! Batch fetches. Bulk loads fail as a whole; per-row loads degrade row by row.
//! Both keep input order and run at most `concurrency` requests at once.

use futures_util::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::Entity;
use crate::data::PokemonType;
use crate::pokeapi::source::{SourceError, SpeciesSource};

pub async fn load_entity(source: &dyn SpeciesSource, id_or_name: &str) -> Result<Entity, SourceError> {
    source.pokemon(id_or_name).await?.to_entity()
}

/// Every species in the first `limit` list entries. Any failed row fails the load.
pub async fn load_pool(
    source: &dyn SpeciesSource,
    limit: u32,
    concurrency: usize,
) -> Result<Vec<Entity>, SourceError> {
    let list = source.list_pokemon(limit, 0).await?;
    let rows = list
        .results
        .into_iter()
        .map(|r| async move { load_entity(source, &r.name).await });
    let pool: Vec<Entity> = stream::iter(rows)
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;
    info!(count = pool.len(), "species pool loaded");
    Ok(pool)
}

/// One resolved (or placeholder) row of a requested team.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRow {
    pub query: String,
    pub name: String,
    pub types: Vec<PokemonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TeamRow {
    fn resolved(query: &str, member: Entity) -> Self {
        Self {
            query: query.to_string(),
            name: member.display_name.clone(),
            types: member.type_tags.clone(),
            member: Some(member),
            error: None,
        }
    }

    fn placeholder(query: &str, err: &SourceError) -> Self {
        Self {
            query: query.to_string(),
            name: format!("pokemon-{}", query.trim().to_lowercase()),
            types: Vec::new(),
            member: None,
            error: Some(err.to_string()),
        }
    }
}

/// Resolves each id or name; failures become placeholder rows and never fail the batch.
pub async fn load_team(source: &dyn SpeciesSource, queries: &[String], concurrency: usize) -> Vec<TeamRow> {
    stream::iter(queries.iter().cloned().map(|q| async move {
        match load_entity(source, &q).await {
            Ok(member) => TeamRow::resolved(&q, member),
            Err(err) => {
                warn!(query = %q, "team member unavailable: {err}");
                TeamRow::placeholder(&q, &err)
            }
        }
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await
}

/// Resolved members only, in request order.
pub fn team_members(rows: &[TeamRow]) -> Vec<Entity> {
    rows.iter().filter_map(|r| r.member.clone()).collect()
}

/// Catalog cards: failed rows are left out of the result.
pub async fn load_cards(source: &dyn SpeciesSource, keys: &[String], concurrency: usize) -> Vec<Entity> {
    let cards: Vec<Option<Entity>> = stream::iter(keys.iter().cloned().map(|k| async move {
        load_entity(source, &k)
            .await
            .map_err(|err| warn!(key = %k, "omitting catalog card: {err}"))
            .ok()
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await;
    cards.into_iter().flatten().collect()
}
