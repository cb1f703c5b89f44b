//! Scoring of one competition round: every search ranked and awarded,
//! plus a round total per team.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use scent_model::{EventIndex, EventResults, ParticipantId, RawResult, TournamentPointEntry};

use crate::error::{CoreError, Result};
use crate::policy::PointPolicy;
use crate::ranking::{compare_results, rank_event};

/// A ranked result and the tournament points it earned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredResult {
    pub rank: u32,
    pub result: RawResult,
    pub tournament_points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEvent {
    pub index: EventIndex,
    pub name: String,
    /// Results in rank order.
    pub results: Vec<ScoredResult>,
}

impl ScoredEvent {
    pub fn entries(&self) -> Vec<TournamentPointEntry> {
        self.results
            .iter()
            .map(|scored| {
                TournamentPointEntry::new(
                    scored.result.participant,
                    self.index,
                    scored.tournament_points,
                )
            })
            .collect()
    }

    pub fn tournament_points(&self, participant: ParticipantId) -> Option<f64> {
        self.results
            .iter()
            .find(|scored| scored.result.participant == participant)
            .map(|scored| scored.tournament_points)
    }
}

/// Ranks one event and awards tournament points.
pub fn score_event(event: &EventResults, policy: PointPolicy) -> Result<ScoredEvent> {
    let mut seen = BTreeSet::new();
    for result in &event.results {
        if !seen.insert(result.participant) {
            return Err(CoreError::DuplicateEventIndex {
                participant: result.participant,
                event: event.index,
            });
        }
    }

    let ranking = rank_event(&event.results);
    let results: Vec<ScoredResult> = ranking
        .iter()
        .map(|entry| ScoredResult {
            rank: entry.rank,
            result: entry.result,
            tournament_points: policy.award(entry.rank, &entry.result),
        })
        .collect();
    debug!(
        event = %event.name,
        event_index = event.index.get(),
        result_count = results.len(),
        "event scored"
    );
    Ok(ScoredEvent {
        index: event.index,
        name: event.name.clone(),
        results,
    })
}

/// One team's sums over the searches of a round it ran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTotal {
    pub participant: ParticipantId,
    pub points: f64,
    pub errors: u32,
    pub time_ms: u64,
    pub special_count: u32,
    pub tournament_points: f64,
    pub event_count: usize,
}

impl RoundTotal {
    fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            points: 0.0,
            errors: 0,
            time_ms: 0,
            special_count: 0,
            tournament_points: 0.0,
            event_count: 0,
        }
    }

    fn add(&mut self, scored: &ScoredResult) {
        self.points += scored.result.points;
        self.errors = self.errors.saturating_add(scored.result.errors);
        self.time_ms = self.time_ms.saturating_add(scored.result.time_ms);
        self.special_count = self
            .special_count
            .saturating_add(u32::from(scored.result.special));
        self.tournament_points += scored.tournament_points;
        self.event_count += 1;
    }

    fn as_result(&self) -> RawResult {
        RawResult {
            participant: self.participant,
            points: self.points,
            time_ms: self.time_ms,
            errors: self.errors,
            special: self.special_count > 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRoundTotal {
    pub rank: u32,
    pub total: RoundTotal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundScore {
    pub events: Vec<ScoredEvent>,
    /// Round totals in rank order.
    pub totals: Vec<RankedRoundTotal>,
}

impl RoundScore {
    /// Tournament points per search, one entry per search a team ran.
    pub fn search_entries(&self) -> Vec<TournamentPointEntry> {
        self.events.iter().flat_map(ScoredEvent::entries).collect()
    }
}

/// Scores every search of a round and ranks the round totals.
///
/// Totals are ranked with the same chain as single searches. Teams with
/// fully equal totals keep the order in which they first appear.
pub fn score_round(events: &[EventResults], policy: PointPolicy) -> Result<RoundScore> {
    let scored = events
        .iter()
        .map(|event| score_event(event, policy))
        .collect::<Result<Vec<_>>>()?;

    let mut order: Vec<ParticipantId> = Vec::new();
    let mut totals: BTreeMap<ParticipantId, RoundTotal> = BTreeMap::new();
    for event in events {
        for result in &event.results {
            if !totals.contains_key(&result.participant) {
                order.push(result.participant);
                totals.insert(result.participant, RoundTotal::new(result.participant));
            }
        }
    }
    for event in &scored {
        for result in &event.results {
            if let Some(total) = totals.get_mut(&result.result.participant) {
                total.add(result);
            }
        }
    }

    let mut ordered: Vec<RoundTotal> = order
        .iter()
        .filter_map(|participant| totals.get(participant).copied())
        .collect();
    ordered.sort_by(|a, b| compare_results(&a.as_result(), &b.as_result()));
    let totals = ordered
        .into_iter()
        .zip(1u32..)
        .map(|(total, rank)| RankedRoundTotal { rank, total })
        .collect();

    Ok(RoundScore {
        events: scored,
        totals,
    })
}
