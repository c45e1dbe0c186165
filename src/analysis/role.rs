//! Role heuristic: derives a competitive role from the six base stats.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Speed at or above this makes an offensive-leaning species a speedster.
pub const SPEEDSTER_MIN_SPEED: u32 = 100;
/// Margin one side must lead by to count as sweeper or tank.
pub const ROLE_MARGIN: u32 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub special_attack: u32,
    #[serde(default)]
    pub special_defense: u32,
    #[serde(default)]
    pub speed: u32,
}

impl BaseStats {
    /// Build from `(stat-name, base-value)` pairs as named by PokéAPI
    /// (`hp`, `attack`, `defense`, `special-attack`, `special-defense`, `speed`).
    /// Unknown names are ignored; missing stats stay at 0.
    pub fn from_named<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut stats = Self::default();
        for (name, value) in pairs {
            match name {
                "hp" => stats.hp = value,
                "attack" => stats.attack = value,
                "defense" => stats.defense = value,
                "special-attack" => stats.special_attack = value,
                "special-defense" => stats.special_defense = value,
                "speed" => stats.speed = value,
                _ => {}
            }
        }
        stats
    }

    pub fn offensive(&self) -> u32 {
        self.attack.saturating_add(self.special_attack)
    }

    pub fn defensive(&self) -> u32 {
        self.hp
            .saturating_add(self.defense)
            .saturating_add(self.special_defense)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sweeper,
    Tank,
    /// Part of the role vocabulary but never produced by [classify].
    Support,
    Speedster,
    Balanced,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Self::Sweeper,
        Self::Tank,
        Self::Support,
        Self::Speedster,
        Self::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sweeper => "sweeper",
            Self::Tank => "tank",
            Self::Support => "support",
            Self::Speedster => "speedster",
            Self::Balanced => "balanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sweeper => "Sweeper",
            Self::Tank => "Tank",
            Self::Support => "Support",
            Self::Speedster => "Speedster",
            Self::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First matching rule wins: speedster, sweeper, tank, then balanced.
pub fn classify(stats: &BaseStats) -> Role {
    let offensive = stats.offensive();
    let defensive = stats.defensive();

    if stats.speed >= SPEEDSTER_MIN_SPEED && offensive >= defensive {
        Role::Speedster
    } else if offensive >= defensive.saturating_add(ROLE_MARGIN) {
        Role::Sweeper
    } else if defensive >= offensive.saturating_add(ROLE_MARGIN) {
        Role::Tank
    } else {
        Role::Balanced
    }
}
