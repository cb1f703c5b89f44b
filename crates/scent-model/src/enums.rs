//! Competition level and the constants it fixes for a run.
//!
//! A level is chosen once per run. It decides which point award formula
//! applies, how many searches make up one competition round, and how many
//! entries are kept by the best-K aggregations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Maximum points a single search can award at level B.
pub const LEVEL_B_MAX_EVENT_POINTS: f64 = 25.0;

/// Competition level.
///
/// Level A is the entry class (legacy label `NW1`), level B the next class
/// (legacy label `NW2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    A,
    B,
}

impl Level {
    /// Canonical short name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A => "A",
            Level::B => "B",
        }
    }

    /// Prefix of the round files belonging to this level.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Level::A => "NW1",
            Level::B => "NW2",
        }
    }

    /// Number of searches in one competition round.
    pub fn searches_per_round(&self) -> u32 {
        match self {
            Level::A => 4,
            Level::B => 3,
        }
    }

    /// Default number of searches kept for the season standings.
    ///
    /// Three rounds' worth of searches.
    pub fn default_keep_searches(&self) -> usize {
        self.searches_per_round() as usize * 3
    }

    /// Default number of round totals kept for the round standings.
    pub fn default_keep_rounds(&self) -> usize {
        3
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = ModelError;

    /// Accepts `A`/`B`, `LevelA`/`LevelB` and the legacy `NW1`/`NW2`
    /// labels, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "A" | "LEVELA" | "NW1" => Ok(Level::A),
            "B" | "LEVELB" | "NW2" => Ok(Level::B),
            _ => Err(ModelError::UnknownLevel {
                value: s.to_string(),
            }),
        }
    }
}
