//! Fetch-then-analyse flows shared by the CLI and the HTTP API.

use serde::Serialize;

use crate::analysis::{analyze_team, SynergyMode, TeamReport};
use crate::data::{League, TrainerTeam};
use crate::pokeapi::{load_team, team_members, SpeciesSource, TeamRow};

#[derive(Debug, Clone, Serialize)]
pub struct TeamBuild {
    pub rows: Vec<TeamRow>,
    /// Absent when no requested member could be resolved.
    pub report: Option<TeamReport>,
}

/// Resolves up to six ids or names and analyses whichever resolved.
pub async fn build_team(
    source: &dyn SpeciesSource,
    queries: &[String],
    mode: SynergyMode,
    concurrency: usize,
) -> TeamBuild {
    let rows = load_team(source, queries, concurrency).await;
    let members = team_members(&rows);
    let report = match analyze_team(&members, mode) {
        Ok(report) => Some(report),
        Err(err) => {
            tracing::warn!(requested = queries.len(), "no analysis: {err}");
            None
        }
    };
    TeamBuild { rows, report }
}

#[derive(Debug, thiserror::Error)]
#[error("no trainer '{trainer}' in the {league} league")]
pub struct UnknownTrainer {
    pub league: String,
    pub trainer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainerAnalysis {
    pub trainer: TrainerTeam,
    #[serde(flatten)]
    pub build: TeamBuild,
}

pub async fn analyze_trainer(
    source: &dyn SpeciesSource,
    league: &League,
    trainer_key: &str,
    mode: SynergyMode,
    concurrency: usize,
) -> Result<TrainerAnalysis, UnknownTrainer> {
    let trainer = league.trainer(trainer_key).ok_or_else(|| UnknownTrainer {
        league: league.league_name.clone(),
        trainer: trainer_key.to_string(),
    })?;
    let queries: Vec<String> = trainer.team.iter().map(u32::to_string).collect();
    let build = build_team(source, &queries, mode, concurrency).await;
    Ok(TrainerAnalysis { trainer, build })
}
