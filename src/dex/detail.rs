//! Species detail page: one entity's data merged from the pokemon, species, type
//! and evolution-chain endpoints.

use serde::Serialize;
use tracing::warn;

use crate::analysis::{classify, Role};
use crate::dex::format::{artwork_url, format_name, id_from_url, pick_description};
use crate::dex::weakness::weaknesses_for;
use crate::pokeapi::schema::{NamedResource, SpeciesPayload};
use crate::pokeapi::{SourceError, SpeciesSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub name: String,
    pub base: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesLink {
    pub id: u32,
    pub name: String,
    pub display_name: String,
}

impl SpeciesLink {
    fn from_resource(resource: &NamedResource) -> Option<Self> {
        resource.id().map(|id| Self {
            id,
            name: resource.name.clone(),
            display_name: format_name(&resource.name),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonDetails {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub image: String,
    pub types: Vec<String>,
    pub height_meters: f64,
    pub weight_kg: f64,
    pub stats: Vec<StatLine>,
    pub role: Role,
    pub description: String,
    pub weaknesses: Vec<String>,
    pub varieties: Vec<SpeciesLink>,
    pub evolutions: Vec<SpeciesLink>,
}

/// Unknown ids and names surface as `SourceError::NotFound`. The species record is
/// required; type relations and the evolution chain are optional and fall back to empty.
pub async fn load_details(
    source: &dyn SpeciesSource,
    id_or_name: &str,
    languages: &[String],
) -> Result<PokemonDetails, SourceError> {
    let pokemon = source.pokemon(id_or_name).await?;
    let species_key = pokemon
        .species
        .as_ref()
        .map(|s| s.id().map(|id| id.to_string()).unwrap_or_else(|| s.name.clone()))
        .unwrap_or_else(|| pokemon.name.clone());
    let species = source.species(&species_key).await?;

    let types = pokemon.type_names();
    let weaknesses = weaknesses_for(source, &types).await;
    let evolutions = evolution_line(source, &species).await;

    let varieties = species
        .varieties
        .iter()
        .filter(|v| !v.is_default)
        .filter_map(|v| SpeciesLink::from_resource(&v.pokemon))
        .collect();

    let image = match pokemon.official_artwork() {
        Some(url) => url.to_string(),
        None => {
            warn!(pokemon = %pokemon.name, "no official artwork, using fallback url");
            artwork_url(pokemon.id)
        }
    };

    let base_stats = pokemon.base_stats();
    Ok(PokemonDetails {
        id: pokemon.id,
        display_name: format_name(&pokemon.name),
        name: pokemon.name.clone(),
        image,
        types,
        height_meters: f64::from(pokemon.height) / 10.0,
        weight_kg: f64::from(pokemon.weight) / 10.0,
        stats: pokemon
            .stats
            .iter()
            .map(|s| StatLine {
                name: s.stat.name.clone(),
                base: s.base_stat,
            })
            .collect(),
        role: classify(&base_stats),
        description: pick_description(&species.flavor_text_entries, languages),
        weaknesses,
        varieties,
        evolutions,
    })
}

async fn evolution_line(source: &dyn SpeciesSource, species: &SpeciesPayload) -> Vec<SpeciesLink> {
    let Some(chain_id) = species
        .evolution_chain
        .as_ref()
        .and_then(|c| id_from_url(&c.url))
    else {
        return Vec::new();
    };
    match source.evolution_chain(chain_id).await {
        Ok(payload) => payload
            .chain
            .flatten()
            .into_iter()
            .filter_map(SpeciesLink::from_resource)
            .collect(),
        Err(err) => {
            warn!(species = %species.name, "evolution chain unavailable: {err}");
            Vec::new()
        }
    }
}
