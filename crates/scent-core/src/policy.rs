//! Tournament point awards.
//!
//! One policy is selected per run from the competition level and converts
//! a ranked result into the tournament points that feed the standings.

use scent_model::{LEVEL_B_MAX_EVENT_POINTS, Level, RawResult};

/// Points every participant receives at level A, and the floor at level B.
pub const BASE_POINTS: f64 = 3.0;

/// Level A bonus for finding anything at all.
pub const LEVEL_A_SCORING_BONUS: f64 = 7.0;

/// Bonus for the special-achievement flag, both levels.
pub const SPECIAL_BONUS: f64 = 5.0;

/// Ranks that earn a placement bonus of `6 - rank`.
const PLACEMENT_BONUS_RANKS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointPolicy {
    /// Fixed points for taking part and scoring, plus placement bonus.
    LevelA,
    /// Search points minus errors, with a placement bonus for full scores.
    LevelB { max_points: f64 },
}

impl PointPolicy {
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::A => PointPolicy::LevelA,
            Level::B => PointPolicy::LevelB {
                max_points: LEVEL_B_MAX_EVENT_POINTS,
            },
        }
    }

    /// Tournament points for a result finishing at `rank` (1-based).
    pub fn award(&self, rank: u32, result: &RawResult) -> f64 {
        match *self {
            PointPolicy::LevelA => {
                let mut points = BASE_POINTS;
                if result.points > 0.0 {
                    points += LEVEL_A_SCORING_BONUS + placement_bonus(rank);
                }
                if result.special {
                    points += SPECIAL_BONUS;
                }
                points
            }
            PointPolicy::LevelB { max_points } => {
                let mut points = result.points;
                if result.points == max_points {
                    points += placement_bonus(rank);
                }
                if result.special {
                    points += SPECIAL_BONUS;
                }
                points -= f64::from(result.errors);
                points.max(BASE_POINTS)
            }
        }
    }
}

impl From<Level> for PointPolicy {
    fn from(level: Level) -> Self {
        Self::for_level(level)
    }
}

fn placement_bonus(rank: u32) -> f64 {
    if (1..=PLACEMENT_BONUS_RANKS).contains(&rank) {
        f64::from(PLACEMENT_BONUS_RANKS + 1 - rank)
    } else {
        0.0
    }
}
