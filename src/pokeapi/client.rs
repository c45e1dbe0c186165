use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::pokeapi::schema::{
    EvolutionChainPayload, PokemonPayload, ResourceList, SpeciesPayload, TypePayload,
};
use crate::pokeapi::source::{SourceError, SpeciesSource};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// reqwest-backed client for the public PokéAPI (or any server with the same layout).
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, subject: &str) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("PokéAPI request to {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SourceError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

/// PokéAPI keys are lowercase slugs or numeric ids. Anything else cannot name a
/// resource and is rejected before it reaches the URL.
fn checked_key(id_or_name: &str) -> Result<String, SourceError> {
    let key = id_or_name.trim().to_lowercase();
    let is_slug = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if is_slug {
        Ok(key)
    } else {
        Err(SourceError::NotFound(key))
    }
}

#[async_trait]
impl SpeciesSource for PokeApiClient {
    async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<ResourceList, SourceError> {
        self.get_json(&format!("pokemon?limit={limit}&offset={offset}"), "pokemon list")
            .await
    }

    async fn pokemon(&self, id_or_name: &str) -> Result<PokemonPayload, SourceError> {
        let key = checked_key(id_or_name)?;
        self.get_json(&format!("pokemon/{key}"), &key).await
    }

    async fn species(&self, id_or_name: &str) -> Result<SpeciesPayload, SourceError> {
        let key = checked_key(id_or_name)?;
        self.get_json(&format!("pokemon-species/{key}"), &key).await
    }

    async fn pokemon_type(&self, name: &str) -> Result<TypePayload, SourceError> {
        let key = checked_key(name)?;
        self.get_json(&format!("type/{key}"), &key).await
    }

    async fn evolution_chain(&self, id: u32) -> Result<EvolutionChainPayload, SourceError> {
        self.get_json(&format!("evolution-chain/{id}"), &format!("evolution chain {id}"))
            .await
    }
}
