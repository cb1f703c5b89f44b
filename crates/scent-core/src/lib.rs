//! Scoring engine for scent-work tournaments.
//!
//! Results flow through the engine in fixed stages:
//!
//! 1. [`rank_event`] orders one event's results
//! 2. [`PointPolicy`] converts ranks into tournament points
//! 3. [`aggregate`] folds each team's points with an [`AggregationRule`]
//! 4. [`build_standings`] ranks the totals into placements
//!
//! [`score_round`], [`season_standings`] and [`round_standings`] run these
//! stages for the three kinds of report.

pub mod aggregate;
pub mod error;
pub mod policy;
pub mod ranking;
pub mod round;
pub mod season;
pub mod standings;

pub use aggregate::{AggregationRule, aggregate, keep_best, sum_all};
pub use error::{CoreError, Result};
pub use policy::{BASE_POINTS, LEVEL_A_SCORING_BONUS, PointPolicy, SPECIAL_BONUS};
pub use ranking::{compare_results, rank_event};
pub use round::{
    RankedRoundTotal, RoundScore, RoundTotal, ScoredEvent, ScoredResult, score_event,
    score_round,
};
pub use season::{
    EventLabel, PointTable, RoundStandings, SeasonRow, SeasonStandings, round_standings,
    season_standings,
};
pub use standings::build_standings;
