pub mod pokemon_type;
pub mod regions;

pub use pokemon_type::{PokemonType, UnknownType};
pub use regions::{
    EliteRole, EliteTrainer, FeaturedSpecies, Gym, League, Region, RegionCatalog, RegionError,
    TrainerTeam,
};
