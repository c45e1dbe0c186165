//! Team analysis: role classification, aggregation, scoring and report text.

pub mod aggregate;
pub mod entity;
pub mod narrative;
pub mod report;
pub mod rng;
pub mod role;
pub mod score;
pub mod synergy;
pub mod team;

pub use aggregate::{aggregate, RoleCounts, TeamAggregate, TeamError, MAX_TEAM_SIZE};
pub use entity::{Entity, EntityError, EntityInput};
pub use narrative::{CounterTeam, GapKind, Severity, StructuralWeakness};
pub use report::{analyze_team, RoleBalance, Strength, TeamReport};
pub use role::{classify, BaseStats, Role};
pub use score::{synthesize, ScoreBreakdown, MAX_TEAM_SCORE, MIN_TEAM_SCORE};
pub use synergy::{pair_synergies, InvalidSynergyMode, Synergy, SynergyMode};
pub use team::Team;
