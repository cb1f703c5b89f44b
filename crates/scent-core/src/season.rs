//! Standings across the rounds of a season.
//!
//! Two views are built from the same points sheets: the season standings,
//! which keep each team's best searches, and the round standings, which
//! keep each team's best round totals.

use std::collections::BTreeMap;

use tracing::info;

use scent_model::{CategoryTable, EventIndex, ParticipantId, Placement, TournamentPointEntry};

use crate::aggregate::{AggregationRule, aggregate};
use crate::error::Result;
use crate::standings::build_standings;

/// A standings column: one search, or one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLabel {
    pub index: EventIndex,
    pub name: String,
}

impl EventLabel {
    pub fn new(index: EventIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// Tournament points by team and event, for per-event columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    points: BTreeMap<(ParticipantId, EventIndex), f64>,
}

impl PointTable {
    pub fn from_entries(entries: &[TournamentPointEntry]) -> Self {
        let points = entries
            .iter()
            .map(|entry| ((entry.participant, entry.event), entry.points))
            .collect();
        Self { points }
    }

    pub fn get(&self, participant: ParticipantId, event: EventIndex) -> Option<f64> {
        self.points.get(&(participant, event)).copied()
    }
}

/// One line of the season standings.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRow {
    /// Placement by best-K total.
    pub placement: Placement,
    /// Sum of every search.
    pub season_total: f64,
    /// Sums per configured category, in category table order.
    pub category_totals: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStandings {
    /// Number of searches counted per team.
    pub keep: usize,
    pub events: Vec<EventLabel>,
    pub categories: Vec<String>,
    pub rows: Vec<SeasonRow>,
    /// Placements by sum of every search.
    pub totals: Vec<Placement>,
    pub points: PointTable,
}

/// Builds the season standings over every search of every round.
pub fn season_standings(
    events: Vec<EventLabel>,
    entries: &[TournamentPointEntry],
    keep: usize,
    categories: &CategoryTable,
) -> Result<SeasonStandings> {
    let best = build_standings(aggregate(entries, AggregationRule::KeepBest(keep))?);
    let totals = build_standings(aggregate(entries, AggregationRule::SumAll)?);
    let season_totals: BTreeMap<ParticipantId, f64> = totals
        .iter()
        .map(|placement| (placement.participant(), placement.total()))
        .collect();

    let category_names: Vec<String> = categories.names().map(str::to_string).collect();
    let mut by_category: Vec<BTreeMap<ParticipantId, f64>> = Vec::new();
    for name in &category_names {
        let in_category: Vec<TournamentPointEntry> = entries
            .iter()
            .filter(|entry| {
                events
                    .iter()
                    .find(|event| event.index == entry.event)
                    .and_then(|event| categories.classify(&event.name))
                    == Some(name.as_str())
            })
            .copied()
            .collect();
        let sums = aggregate(&in_category, AggregationRule::SumAll)?
            .into_iter()
            .map(|standing| (standing.participant, standing.total))
            .collect();
        by_category.push(sums);
    }

    let rows: Vec<SeasonRow> = best
        .into_iter()
        .map(|placement| {
            let participant = placement.participant();
            SeasonRow {
                season_total: season_totals.get(&participant).copied().unwrap_or(0.0),
                category_totals: by_category
                    .iter()
                    .map(|sums| sums.get(&participant).copied().unwrap_or(0.0))
                    .collect(),
                placement,
            }
        })
        .collect();

    info!(
        event_count = events.len(),
        participant_count = rows.len(),
        keep,
        "season standings built"
    );
    Ok(SeasonStandings {
        keep,
        events,
        categories: category_names,
        rows,
        totals,
        points: PointTable::from_entries(entries),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundStandings {
    /// Number of round totals counted per team.
    pub keep: usize,
    pub rounds: Vec<EventLabel>,
    pub placements: Vec<Placement>,
    pub points: PointTable,
}

/// Builds the standings over round totals, one entry per team and round.
pub fn round_standings(
    rounds: Vec<EventLabel>,
    entries: &[TournamentPointEntry],
    keep: usize,
) -> Result<RoundStandings> {
    let placements = build_standings(aggregate(entries, AggregationRule::KeepBest(keep))?);
    info!(
        round_count = rounds.len(),
        participant_count = placements.len(),
        keep,
        "round standings built"
    );
    Ok(RoundStandings {
        keep,
        rounds,
        placements,
        points: PointTable::from_entries(entries),
    })
}
