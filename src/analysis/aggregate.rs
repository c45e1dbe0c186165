use indexmap::IndexMap;
use serde::Serialize;

use crate::analysis::entity::Entity;
use crate::analysis::role::Role;
use crate::data::PokemonType;

pub const MAX_TEAM_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("team has no members")]
    Empty,
    #[error("team has {0} members; at most {max} are allowed", max = MAX_TEAM_SIZE)]
    TooManyMembers(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub sweepers: u32,
    pub tanks: u32,
    pub supports: u32,
    pub speedsters: u32,
    pub balanced: u32,
}

impl RoleCounts {
    pub fn get(&self, role: Role) -> u32 {
        match role {
            Role::Sweeper => self.sweepers,
            Role::Tank => self.tanks,
            Role::Support => self.supports,
            Role::Speedster => self.speedsters,
            Role::Balanced => self.balanced,
        }
    }

    fn bump(&mut self, role: Role) {
        let slot = match role {
            Role::Sweeper => &mut self.sweepers,
            Role::Tank => &mut self.tanks,
            Role::Support => &mut self.supports,
            Role::Speedster => &mut self.speedsters,
            Role::Balanced => &mut self.balanced,
        };
        *slot += 1;
    }

    /// Number of role buckets with at least one member.
    pub fn variety(&self) -> u32 {
        Role::ALL.iter().filter(|role| self.get(**role) > 0).count() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamAggregate {
    pub member_count: usize,
    /// Keys keep first-seen order across the team.
    pub type_counts: IndexMap<PokemonType, u32>,
    pub role_counts: RoleCounts,
}

impl TeamAggregate {
    pub fn unique_type_count(&self) -> u32 {
        self.type_counts.len() as u32
    }

    pub fn role_variety(&self) -> u32 {
        self.role_counts.variety()
    }
}

pub fn aggregate(members: &[Entity]) -> Result<TeamAggregate, TeamError> {
    if members.is_empty() {
        return Err(TeamError::Empty);
    }
    if members.len() > MAX_TEAM_SIZE {
        return Err(TeamError::TooManyMembers(members.len()));
    }

    let mut type_counts: IndexMap<PokemonType, u32> = IndexMap::new();
    let mut role_counts = RoleCounts::default();
    for member in members {
        for tag in &member.type_tags {
            *type_counts.entry(*tag).or_insert(0) += 1;
        }
        role_counts.bump(member.role());
    }

    Ok(TeamAggregate {
        member_count: members.len(),
        type_counts,
        role_counts,
    })
}
