use serde::Serialize;

use crate::analysis::aggregate::{aggregate, RoleCounts, TeamError};
use crate::analysis::entity::Entity;
use crate::analysis::narrative::{
    battle_strategy, counter_teams, role_recommendation, structural_weaknesses, CounterTeam,
    StructuralWeakness,
};
use crate::analysis::score::{synthesize, ScoreBreakdown};
use crate::analysis::synergy::{pair_synergies, Synergy, SynergyMode};
use crate::data::PokemonType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    #[serde(rename = "type")]
    pub type_tag: PokemonType,
    pub coverage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleBalance {
    #[serde(flatten)]
    pub counts: RoleCounts,
    pub recommendation: String,
}

/// Full analysis of one team. Built in one pass and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamReport {
    pub team_score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<StructuralWeakness>,
    pub role_balance: RoleBalance,
    pub battle_strategy: String,
    pub synergies: Vec<Synergy>,
    pub counter_teams: Vec<CounterTeam>,
}

/// Analyse 1..=6 members in slot order.
pub fn analyze_team(members: &[Entity], mode: SynergyMode) -> Result<TeamReport, TeamError> {
    let agg = aggregate(members)?;
    let breakdown = synthesize(members.len(), &agg);

    let strengths = agg
        .type_counts
        .iter()
        .map(|(tag, count)| Strength { type_tag: *tag, coverage: *count })
        .collect();

    tracing::debug!(
        members = members.len(),
        unique_types = agg.unique_type_count(),
        role_variety = agg.role_variety(),
        score = breakdown.team_score,
        "team analysed"
    );

    Ok(TeamReport {
        team_score: breakdown.team_score,
        score_breakdown: breakdown,
        strengths,
        weaknesses: structural_weaknesses(members, &agg),
        role_balance: RoleBalance {
            counts: agg.role_counts,
            recommendation: role_recommendation(&agg),
        },
        battle_strategy: battle_strategy(members, &agg),
        synergies: pair_synergies(members, mode),
        counter_teams: counter_teams(),
    })
}
