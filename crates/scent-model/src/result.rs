//! Per-event results before and after ranking.

use serde::{Deserialize, Serialize};

use crate::ids::{EventIndex, ParticipantId};

/// One participant's outcome in one event, as parsed from the source sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    pub participant: ParticipantId,
    /// Search points, 0 when the cell was empty.
    pub points: f64,
    /// Elapsed time in milliseconds, 0 when not timed.
    pub time_ms: u64,
    pub errors: u32,
    /// Special-achievement flag ("SSE" in the source sheets).
    pub special: bool,
}

impl RawResult {
    pub fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            points: 0.0,
            time_ms: 0,
            errors: 0,
            special: false,
        }
    }
}

/// All results of one event, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResults {
    pub index: EventIndex,
    pub name: String,
    pub results: Vec<RawResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// 1-based position, never shared with another result.
    pub rank: u32,
    pub result: RawResult,
}

/// Results of one event in final order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventRanking {
    entries: Vec<RankedResult>,
}

impl EventRanking {
    /// Assigns ranks 1..=N to results that are already in final order.
    pub fn from_ordered(results: Vec<RawResult>) -> Self {
        let entries = results
            .into_iter()
            .zip(1u32..)
            .map(|(result, rank)| RankedResult { rank, result })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedResult] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rank_of(&self, participant: ParticipantId) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.result.participant == participant)
            .map(|entry| entry.rank)
    }
}
