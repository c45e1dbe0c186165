//! Fixed-template text for team reports: structural gaps, role recommendation,
//! battle strategy and the stock counter-team archetypes.

use serde::{Deserialize, Serialize};

use crate::analysis::aggregate::TeamAggregate;
use crate::analysis::entity::Entity;

/// Teams with this many distinct types or fewer are flagged as low diversity.
pub const LOW_DIVERSITY_MAX_TYPES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    FragileDefense,
    NoSupport,
    LowTypeDiversity,
}

impl GapKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FragileDefense => "Fragile physical defense",
            Self::NoSupport => "Lacking support/utility",
            Self::LowTypeDiversity => "Low type diversity",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::FragileDefense => Severity::High,
            Self::NoSupport => Severity::Medium,
            Self::LowTypeDiversity => Severity::Critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralWeakness {
    pub kind: GapKind,
    #[serde(rename = "type")]
    pub label: String,
    pub severity: Severity,
    pub count: usize,
    pub affected_pokemon: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterTeam {
    pub name: String,
    pub danger_level: Severity,
    pub common_pokemon: Vec<String>,
    pub counter_strategy: String,
}

const NO_TANK_ADVICE: &str = "Your team lacks consistent tanks. Consider adding at least one Pokémon with high bulk to absorb pressure.";
const NO_SUPPORT_ADVICE: &str = "There is no clear support on the team. Utility moves (screens, status, hazard control) can make a big difference.";
const NO_SWEEPER_ADVICE: &str = "You do not have a clear offensive win condition yet. A main sweeper helps define how you win.";
const BALANCED_ADVICE: &str = "The role balance is healthy. Focus now on polishing move coverage and specific checks for the metagame.";

const SWEEPER_PLAN: &str = "The offensive plan revolves around creating safe windows for the sweeper to come in and pressure the opponent.";
const TANK_PLAN: &str = "The team's tanks set the pace of the match, absorbing damage while you adjust positioning and prepare your win conditions.";
const SUPPORT_PLAN: &str = "The supports help control the field with hazards, removal and status, making it harder for the opponent to react.";
const CLOSING_PLAN: &str = "In longer matches, focus on rotating your Pokémon well, preserving your win condition and punishing predictable switches.";

fn names(members: &[Entity]) -> Vec<String> {
    members.iter().map(|m| m.display_name.clone()).collect()
}

/// Every matching gap is reported, in a fixed order.
pub fn structural_weaknesses(members: &[Entity], aggregate: &TeamAggregate) -> Vec<StructuralWeakness> {
    let roles = &aggregate.role_counts;
    let mut gaps = Vec::new();
    if roles.tanks == 0 {
        gaps.push(GapKind::FragileDefense);
    }
    if roles.supports == 0 {
        gaps.push(GapKind::NoSupport);
    }
    if aggregate.unique_type_count() <= LOW_DIVERSITY_MAX_TYPES {
        gaps.push(GapKind::LowTypeDiversity);
    }

    let affected = names(members);
    gaps.into_iter()
        .map(|kind| StructuralWeakness {
            kind,
            label: kind.label().to_string(),
            severity: kind.severity(),
            count: members.len(),
            affected_pokemon: affected.clone(),
        })
        .collect()
}

pub fn role_recommendation(aggregate: &TeamAggregate) -> String {
    let roles = &aggregate.role_counts;
    let mut text = String::new();
    for (missing, advice) in [
        (roles.tanks == 0, NO_TANK_ADVICE),
        (roles.supports == 0, NO_SUPPORT_ADVICE),
        (roles.sweepers == 0, NO_SWEEPER_ADVICE),
    ] {
        if missing {
            text.push_str(advice);
            text.push('\n');
        }
    }
    if text.is_empty() {
        text.push_str(BALANCED_ADVICE);
    }
    text
}

pub fn battle_strategy(members: &[Entity], aggregate: &TeamAggregate) -> String {
    let mut paragraphs: Vec<String> = Vec::new();

    if let Some((lead, rest)) = members.split_first() {
        if rest.is_empty() {
            paragraphs.push(format!(
                "This team is built around {} as its main pillar.",
                lead.display_name
            ));
        } else {
            paragraphs.push(format!(
                "This team is built around {} as one of its main pillars, backed by {}.",
                lead.display_name,
                names(rest).join(", ")
            ));
        }
    }

    let roles = &aggregate.role_counts;
    if roles.sweepers > 0 {
        paragraphs.push(SWEEPER_PLAN.to_string());
    }
    if roles.tanks > 0 {
        paragraphs.push(TANK_PLAN.to_string());
    }
    if roles.supports > 0 {
        paragraphs.push(SUPPORT_PLAN.to_string());
    }
    paragraphs.push(CLOSING_PLAN.to_string());

    paragraphs.join("\n\n")
}

/// Stock threat archetypes; they do not depend on the team.
pub fn counter_teams() -> Vec<CounterTeam> {
    vec![
        CounterTeam {
            name: "Priority hyper offense".to_string(),
            danger_level: Severity::High,
            common_pokemon: vec!["Weavile".into(), "Dragonite".into(), "Scizor".into()],
            counter_strategy: "Always keep a healthy tank and limit the opponent's setup with constant pressure and hazard control.".to_string(),
        },
        CounterTeam {
            name: "Status-focused stall".to_string(),
            danger_level: Severity::Medium,
            common_pokemon: vec!["Blissey".into(), "Toxapex".into(), "Corviknight".into()],
            counter_strategy: "Value your breakers and do not spend resources early. Setup moves, Taunt and strong wallbreakers are essential.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate::aggregate;
    use crate::analysis::role::BaseStats;
    use crate::data::PokemonType;

    fn sweeper(id: u32, name: &str, t: PokemonType) -> Entity {
        let stats = BaseStats { hp: 60, attack: 130, defense: 60, special_attack: 100, special_defense: 60, speed: 70 };
        Entity::new(id, name, vec![t], stats).expect("valid")
    }

    fn tank(id: u32, name: &str, t: PokemonType) -> Entity {
        let stats = BaseStats { hp: 100, attack: 50, defense: 150, special_attack: 50, special_defense: 150, speed: 40 };
        Entity::new(id, name, vec![t], stats).expect("valid")
    }

    #[test]
    fn gaps_are_reported_in_fixed_order() {
        let team = vec![sweeper(1, "A", PokemonType::Fire)];
        let agg = aggregate(&team).expect("non-empty");
        let kinds: Vec<GapKind> = structural_weaknesses(&team, &agg).iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![GapKind::FragileDefense, GapKind::NoSupport, GapKind::LowTypeDiversity]
        );
    }

    #[test]
    fn weakness_lists_every_member() {
        let team = vec![sweeper(1, "A", PokemonType::Fire), tank(2, "B", PokemonType::Rock)];
        let agg = aggregate(&team).expect("non-empty");
        let gaps = structural_weaknesses(&team, &agg);
        assert!(gaps.iter().all(|g| g.count == 2 && g.affected_pokemon == vec!["A", "B"]));
    }

    #[test]
    fn recommendation_lists_each_missing_role() {
        let team = vec![tank(1, "Wall", PokemonType::Steel)];
        let agg = aggregate(&team).expect("non-empty");
        let text = role_recommendation(&agg);
        assert!(!text.contains(NO_TANK_ADVICE));
        assert!(text.contains(NO_SUPPORT_ADVICE));
        assert!(text.contains(NO_SWEEPER_ADVICE));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn strategy_names_lead_and_backline() {
        let team = vec![
            sweeper(1, "Lead", PokemonType::Fire),
            tank(2, "Wall", PokemonType::Rock),
            tank(3, "Pivot", PokemonType::Water),
        ];
        let agg = aggregate(&team).expect("non-empty");
        let text = battle_strategy(&team, &agg);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert!(paragraphs[0].contains("built around Lead"));
        assert!(paragraphs[0].contains("Wall, Pivot"));
        assert!(paragraphs.contains(&SWEEPER_PLAN));
        assert!(paragraphs.contains(&TANK_PLAN));
        assert!(!paragraphs.contains(&SUPPORT_PLAN));
        assert_eq!(paragraphs.last(), Some(&CLOSING_PLAN));
    }

    #[test]
    fn single_member_strategy_has_no_backline_clause() {
        let team = vec![tank(1, "Solo", PokemonType::Water)];
        let agg = aggregate(&team).expect("non-empty");
        let text = battle_strategy(&team, &agg);
        assert!(text.starts_with("This team is built around Solo as its main pillar."));
    }

    #[test]
    fn counter_teams_are_fixed() {
        let teams = counter_teams();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].danger_level, Severity::High);
        assert_eq!(teams[1].common_pokemon, vec!["Blissey", "Toxapex", "Corviknight"]);
    }
}
