use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::data::RegionCatalog;
use crate::pokeapi::PokeApiClient;

pub mod api;
pub mod routes;

pub use routes::{router, AppState};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Regions(#[from] crate::data::RegionError),
    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

/// Serves the JSON API against the configured PokéAPI base until the process exits.
pub async fn run_server(config: Config) -> Result<(), ServerError> {
    let regions = RegionCatalog::embedded()?;
    let source = Arc::new(PokeApiClient::new(&config.api_base));
    let bind_addr = config.bind.clone();
    let state = AppState::new(source, config, regions);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;
    tracing::info!(
        api_base = %state.config.api_base,
        synergy = %state.config.synergy,
        "pokecoach server listening on http://{bind_addr}"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}
