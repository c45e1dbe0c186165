//! Team score: weighted sub-scores for type diversity, team size and role spread,
//! halved and clamped into a fixed band.

use serde::Serialize;

use crate::analysis::aggregate::TeamAggregate;

pub const DIVERSITY_CAP: u32 = 40;
pub const SIZE_CAP: u32 = 30;
pub const ROLE_CAP: u32 = 30;
pub const SCORE_BASE: u32 = 40;
pub const MIN_TEAM_SCORE: u32 = 45;
pub const MAX_TEAM_SCORE: u32 = 98;

const POINTS_PER_TYPE: u32 = 7;
const POINTS_PER_MEMBER: u32 = 5;
const POINTS_PER_ROLE: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub diversity: u32,
    pub size: u32,
    pub role: u32,
    pub raw: u32,
    pub team_score: u8,
}

pub fn diversity_score(unique_types: u32) -> u32 {
    unique_types.saturating_mul(POINTS_PER_TYPE).min(DIVERSITY_CAP)
}

pub fn size_score(member_count: u32) -> u32 {
    member_count.saturating_mul(POINTS_PER_MEMBER).min(SIZE_CAP)
}

pub fn role_score(role_variety: u32) -> u32 {
    role_variety.saturating_mul(POINTS_PER_ROLE).min(ROLE_CAP)
}

/// Halve with half-up rounding, then clamp.
fn band(raw: u32) -> u8 {
    let halved = raw / 2 + raw % 2;
    halved.clamp(MIN_TEAM_SCORE, MAX_TEAM_SCORE) as u8
}

pub fn synthesize(member_count: usize, aggregate: &TeamAggregate) -> ScoreBreakdown {
    let diversity = diversity_score(aggregate.unique_type_count());
    let size = size_score(u32::try_from(member_count).unwrap_or(u32::MAX));
    let role = role_score(aggregate.role_variety());
    let raw = SCORE_BASE + diversity + size + role;
    ScoreBreakdown {
        diversity,
        size,
        role,
        raw,
        team_score: band(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_scores_are_capped() {
        assert_eq!(diversity_score(5), 35);
        assert_eq!(diversity_score(6), 40);
        assert_eq!(diversity_score(18), 40);
        assert_eq!(size_score(6), 30);
        assert_eq!(size_score(60), 30);
        assert_eq!(role_score(5), 30);
        assert_eq!(role_score(1), 6);
    }

    #[test]
    fn sub_scores_are_monotone() {
        for n in 0..40 {
            assert!(diversity_score(n) <= diversity_score(n + 1));
            assert!(size_score(n) <= size_score(n + 1));
            assert!(role_score(n) <= role_score(n + 1));
        }
    }

    #[test]
    fn band_rounds_half_up_and_clamps() {
        assert_eq!(band(58), 45);
        assert_eq!(band(116), 58);
        assert_eq!(band(117), 59);
        assert_eq!(band(140), 70);
        assert_eq!(band(1_000), 98);
    }
}
