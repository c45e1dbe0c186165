//! A species placed in a team slot. The role is derived once from base stats at construction.

use serde::{Deserialize, Serialize};

use crate::analysis::role::{classify, BaseStats, Role};
use crate::data::PokemonType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error("id must be a positive integer")]
    ZeroId,
    #[error("name must not be empty")]
    EmptyName,
    #[error("at least one type is required")]
    NoTypes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntityInput")]
pub struct Entity {
    pub id: u32,
    pub display_name: String,
    pub type_tags: Vec<PokemonType>,
    pub base_stats: BaseStats,
    role: Role,
}

/// Wire shape accepted for inline team members; the role is never taken from input.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityInput {
    pub id: u32,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(alias = "types")]
    pub type_tags: Vec<PokemonType>,
    #[serde(default, alias = "stats")]
    pub base_stats: BaseStats,
}

impl Entity {
    /// Duplicate type tags are dropped, keeping first-seen order.
    pub fn new(
        id: u32,
        display_name: impl Into<String>,
        type_tags: Vec<PokemonType>,
        base_stats: BaseStats,
    ) -> Result<Self, EntityError> {
        let display_name = display_name.into();
        if id == 0 {
            return Err(EntityError::ZeroId);
        }
        if display_name.trim().is_empty() {
            return Err(EntityError::EmptyName);
        }
        let mut tags: Vec<PokemonType> = Vec::with_capacity(type_tags.len());
        for tag in type_tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        if tags.is_empty() {
            return Err(EntityError::NoTypes);
        }
        Ok(Self {
            id,
            display_name,
            type_tags: tags,
            role: classify(&base_stats),
            base_stats,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl TryFrom<EntityInput> for Entity {
    type Error = EntityError;

    fn try_from(input: EntityInput) -> Result<Self, Self::Error> {
        Entity::new(input.id, input.display_name, input.type_tags, input.base_stats)
    }
}
