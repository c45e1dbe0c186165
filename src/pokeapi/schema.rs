//! Raw PokéAPI payloads. Only the fields the crate reads are modelled; everything
//! else in the responses is ignored. Conversion into domain types happens here.

use serde::{Deserialize, Serialize};

use crate::analysis::{BaseStats, Entity};
use crate::data::PokemonType;
use crate::dex::format::{capitalize, id_from_url};
use crate::pokeapi::source::SourceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Trailing numeric path segment of the resource URL, if any.
    pub fn id(&self) -> Option<u32> {
        id_from_url(&self.url)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    /// Decimetres.
    #[serde(default)]
    pub height: u32,
    /// Hectograms.
    #[serde(default)]
    pub weight: u32,
    pub species: Option<NamedResource>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl PokemonPayload {
    /// Type names ordered by slot, unparsed.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.type_ref.name.clone()).collect()
    }

    /// Known type tags in slot order. Unrecognised names are dropped with a warning.
    pub fn type_tags(&self) -> Vec<PokemonType> {
        self.type_names()
            .into_iter()
            .filter_map(|name| match name.parse::<PokemonType>() {
                Ok(tag) => Some(tag),
                Err(err) => {
                    tracing::warn!(pokemon = %self.name, "dropping type tag: {err}");
                    None
                }
            })
            .collect()
    }

    pub fn base_stats(&self) -> BaseStats {
        BaseStats::from_named(
            self.stats
                .iter()
                .map(|s| (s.stat.name.as_str(), s.base_stat)),
        )
    }

    pub fn official_artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
    }

    /// Entity with a capitalised display name. Records with a zero id or no
    /// usable type tag are rejected.
    pub fn to_entity(&self) -> Result<Entity, SourceError> {
        Entity::new(
            self.id,
            capitalize(&self.name),
            self.type_tags(),
            self.base_stats(),
        )
        .map_err(|source| SourceError::InvalidRecord {
            name: self.name.clone(),
            source,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Variety {
    pub is_default: bool,
    pub pokemon: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: Option<ApiResource>,
    #[serde(default)]
    pub varieties: Vec<Variety>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    pub slot: u8,
    pub pokemon: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypePayload {
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Pre-order walk: each stage before the stages it evolves into.
    pub fn flatten(&self) -> Vec<&NamedResource> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(link) = stack.pop() {
            out.push(&link.species);
            stack.extend(link.evolves_to.iter().rev());
        }
        out
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainPayload {
    pub id: u32,
    pub chain: ChainLink,
}
