use async_trait::async_trait;

use crate::analysis::EntityError;
use crate::pokeapi::schema::{
    EvolutionChainPayload, PokemonPayload, ResourceList, SpeciesPayload, TypePayload,
};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("'{0}' was not found")]
    NotFound(String),

    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("invalid record '{name}': {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: EntityError,
    },
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Provider of species, type and evolution data. `PokeApiClient` is the
/// network implementation; tests plug in fixtures.
#[async_trait]
pub trait SpeciesSource: Send + Sync {
    async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<ResourceList, SourceError>;

    async fn pokemon(&self, id_or_name: &str) -> Result<PokemonPayload, SourceError>;

    async fn species(&self, id_or_name: &str) -> Result<SpeciesPayload, SourceError>;

    async fn pokemon_type(&self, name: &str) -> Result<TypePayload, SourceError>;

    async fn evolution_chain(&self, id: u32) -> Result<EvolutionChainPayload, SourceError>;
}
