//! Tournament points and the standings built from them.

use serde::{Deserialize, Serialize};

use crate::ids::{EventIndex, ParticipantId};

/// Tournament points one participant earned in one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TournamentPointEntry {
    pub participant: ParticipantId,
    pub event: EventIndex,
    pub points: f64,
}

impl TournamentPointEntry {
    pub fn new(participant: ParticipantId, event: EventIndex, points: f64) -> Self {
        Self {
            participant,
            event,
            points,
        }
    }
}

/// A participant's aggregated tournament points.
///
/// `counted` and `dropped` together cover every entry the participant had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedStanding {
    pub participant: ParticipantId,
    /// Entries that contributed to `total`, best first.
    pub counted: Vec<TournamentPointEntry>,
    /// Events left out of `total`, ascending.
    pub dropped: Vec<EventIndex>,
    pub total: f64,
}

impl AggregatedStanding {
    pub fn is_dropped(&self, event: EventIndex) -> bool {
        self.dropped.contains(&event)
    }

    pub fn entry_count(&self) -> usize {
        self.counted.len() + self.dropped.len()
    }
}

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// 1-based, never shared.
    pub rank: u32,
    pub standing: AggregatedStanding,
}

impl Placement {
    pub fn participant(&self) -> ParticipantId {
        self.standing.participant
    }

    pub fn total(&self) -> f64 {
        self.standing.total
    }
}
