//! PokéAPI access: payload schema, the `SpeciesSource` seam, the HTTP client and batch loaders.

pub mod client;
pub mod loader;
pub mod schema;
pub mod source;

pub use client::{PokeApiClient, DEFAULT_API_BASE};
pub use loader::{load_cards, load_entity, load_pool, load_team, team_members, TeamRow};
pub use source::{SourceError, SpeciesSource};
