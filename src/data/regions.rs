//! Region lore and league rosters, embedded in the binary from data/regions.yaml.

use serde::{Deserialize, Serialize};

use crate::data::pokemon_type::PokemonType;

const EMBEDDED_REGIONS: &str = include_str!("../../data/regions.yaml");

#[derive(Debug, thiserror::Error)]
pub enum RegionError {
    #[error("failed to parse region catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedSpecies {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub generation: u8,
    pub total_pokemon: u32,
    pub summary: String,
    #[serde(default)]
    pub facts: Vec<String>,
    #[serde(default)]
    pub featured: Vec<FeaturedSpecies>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gym {
    pub id: String,
    pub city: String,
    pub leader: String,
    pub badge: String,
    pub primary_type: PokemonType,
    pub description: String,
    /// National Dex ids, duplicates allowed.
    pub team: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EliteRole {
    EliteFour,
    Champion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EliteTrainer {
    pub id: String,
    pub name: String,
    pub role: EliteRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty_type: Option<PokemonType>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ace_pokemon_id: Option<u32>,
    pub team: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub region: String,
    pub league_name: String,
    pub overview: String,
    #[serde(default)]
    pub gyms: Vec<Gym>,
    #[serde(default)]
    pub elite: Vec<EliteTrainer>,
    #[serde(default)]
    pub trivia: Vec<String>,
}

/// A trainer from either the gym circuit or the elite/champion line-up.
#[derive(Debug, Clone, Serialize)]
pub struct TrainerTeam {
    pub trainer_id: String,
    pub trainer_name: String,
    pub team: Vec<u32>,
}

impl League {
    /// Finds a trainer by gym id, leader name, or elite trainer id (case-insensitive).
    pub fn trainer(&self, key: &str) -> Option<TrainerTeam> {
        let key = key.trim();
        if let Some(gym) = self
            .gyms
            .iter()
            .find(|g| g.id.eq_ignore_ascii_case(key) || g.leader.eq_ignore_ascii_case(key))
        {
            return Some(TrainerTeam {
                trainer_id: gym.id.clone(),
                trainer_name: gym.leader.clone(),
                team: gym.team.clone(),
            });
        }
        self.elite
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(key) || e.name.eq_ignore_ascii_case(key))
            .map(|e| TrainerTeam {
                trainer_id: e.id.clone(),
                trainer_name: e.name.clone(),
                team: e.team.clone(),
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCatalog {
    #[serde(default)]
    pub data_version: Option<String>,
    pub regions: Vec<Region>,
    #[serde(default)]
    pub leagues: Vec<League>,
}

impl RegionCatalog {
    /// Catalog compiled into the binary.
    pub fn embedded() -> Result<Self, RegionError> {
        Ok(serde_yaml::from_str(EMBEDDED_REGIONS)?)
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        let id = id.trim();
        self.regions.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    pub fn league(&self, region_id: &str) -> Option<&League> {
        let id = region_id.trim();
        self.leagues.iter().find(|l| l.region.eq_ignore_ascii_case(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_has_ten_regions() {
        let catalog = RegionCatalog::embedded().expect("embedded catalog parses");
        assert_eq!(catalog.regions.len(), 10);
        assert!(catalog.regions.iter().all(|r| !r.featured.is_empty()));
    }

    #[test]
    fn region_lookup_ignores_case() {
        let catalog = RegionCatalog::embedded().expect("embedded catalog parses");
        let kanto = catalog.region("KANTO").expect("kanto present");
        assert_eq!(kanto.total_pokemon, 151);
        assert!(catalog.region("orre").is_none());
    }

    #[test]
    fn league_trainer_resolves_by_gym_or_leader_or_elite() {
        let catalog = RegionCatalog::embedded().expect("embedded catalog parses");
        let kanto = catalog.league("kanto").expect("kanto league present");
        assert_eq!(kanto.gyms.len(), 8);

        let misty = kanto.trainer("cerulean").expect("cerulean gym");
        assert_eq!(misty.trainer_name, "Misty");
        assert_eq!(misty.team, vec![120, 121]);

        let by_leader = kanto.trainer("misty").expect("leader lookup");
        assert_eq!(by_leader.trainer_id, "cerulean");

        let blue = kanto.trainer("Blue").expect("champion lookup");
        assert_eq!(blue.team.len(), 6);
    }

    #[test]
    fn stub_leagues_have_empty_rosters() {
        let catalog = RegionCatalog::embedded().expect("embedded catalog parses");
        let johto = catalog.league("johto").expect("johto stub");
        assert!(johto.gyms.is_empty());
        assert!(johto.trainer("falkner").is_none());
    }
}
