//! Adjacent-pair synergy bonuses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::entity::Entity;
use crate::analysis::rng::Rng;

pub const MIN_SYNERGY_BONUS: u32 = 10;
pub const MAX_SYNERGY_BONUS: u32 = 24;

/// How pair bonuses are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SynergyMode {
    /// Bonus is a pure function of the two species ids and their order.
    #[default]
    PerPair,
    /// One generator seeded once per analysis; reproducible for a fixed seed.
    Seeded(u64),
    /// Fresh entropy on every analysis.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid synergy mode '{0}' (expected pair, random or seed:<n>)")]
pub struct InvalidSynergyMode(pub String);

impl FromStr for SynergyMode {
    type Err = InvalidSynergyMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_ascii_lowercase();
        match raw.as_str() {
            "pair" | "per-pair" => Ok(Self::PerPair),
            "random" => Ok(Self::Random),
            _ => raw
                .strip_prefix("seed:")
                .and_then(|n| n.trim().parse::<u64>().ok())
                .map(Self::Seeded)
                .ok_or_else(|| InvalidSynergyMode(s.to_string())),
        }
    }
}

impl fmt::Display for SynergyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerPair => f.write_str("pair"),
            Self::Seeded(seed) => write!(f, "seed:{seed}"),
            Self::Random => f.write_str("random"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synergy {
    pub pokemon1: String,
    pub pokemon2: String,
    pub score: u32,
    pub description: String,
}

enum BonusSource {
    PerPair,
    Stream(Rng),
}

impl BonusSource {
    fn new(mode: SynergyMode) -> Self {
        match mode {
            SynergyMode::PerPair => Self::PerPair,
            SynergyMode::Seeded(seed) => Self::Stream(Rng::new(seed)),
            SynergyMode::Random => Self::Stream(Rng::from_entropy()),
        }
    }

    fn bonus(&mut self, a: &Entity, b: &Entity) -> u32 {
        match self {
            Self::PerPair => {
                let seed = (u64::from(a.id) << 32) | u64::from(b.id);
                Rng::new(seed).next_in_range(MIN_SYNERGY_BONUS, MAX_SYNERGY_BONUS)
            }
            Self::Stream(rng) => rng.next_in_range(MIN_SYNERGY_BONUS, MAX_SYNERGY_BONUS),
        }
    }
}

/// One descriptor per adjacent pair of members, in slot order.
pub fn pair_synergies(members: &[Entity], mode: SynergyMode) -> Vec<Synergy> {
    let mut source = BonusSource::new(mode);
    members
        .windows(2)
        .map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            Synergy {
                pokemon1: a.display_name.clone(),
                pokemon2: b.display_name.clone(),
                score: source.bonus(a, b),
                description: format!(
                    "Good offensive and defensive synergy between {} and {}, covering each other's weaknesses and keeping pressure on the field.",
                    a.display_name, b.display_name
                ),
            }
        })
        .collect()
}
