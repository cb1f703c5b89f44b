//! Cross-event aggregation of tournament points.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use scent_model::{AggregatedStanding, EventIndex, ParticipantId, TournamentPointEntry};

use crate::error::{CoreError, Result};

/// How a participant's per-event points are folded into one total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationRule {
    /// Every entry counts.
    SumAll,
    /// The `K` best entries count, the rest are dropped.
    KeepBest(usize),
}

impl AggregationRule {
    /// Aggregates the entries of a single participant.
    pub fn apply(
        &self,
        participant: ParticipantId,
        entries: &[TournamentPointEntry],
    ) -> AggregatedStanding {
        match *self {
            AggregationRule::SumAll => sum_all(participant, entries),
            AggregationRule::KeepBest(k) => keep_best(participant, entries, k),
        }
    }
}

/// Best entry first: more points, then the earlier event.
fn compare_entries(a: &TournamentPointEntry, b: &TournamentPointEntry) -> Ordering {
    b.points.total_cmp(&a.points).then(a.event.cmp(&b.event))
}

/// Counts every entry of one participant.
pub fn sum_all(participant: ParticipantId, entries: &[TournamentPointEntry]) -> AggregatedStanding {
    keep_best(participant, entries, usize::MAX)
}

/// Keeps the `k` best entries of one participant and drops the rest.
///
/// Entries with equal points are ordered by event index, so the earlier
/// event is kept. Dropped event indices are reported ascending.
pub fn keep_best(
    participant: ParticipantId,
    entries: &[TournamentPointEntry],
    k: usize,
) -> AggregatedStanding {
    let mut counted = entries.to_vec();
    counted.sort_by(compare_entries);
    let rest = counted.split_off(k.min(counted.len()));
    let mut dropped: Vec<EventIndex> = rest.iter().map(|entry| entry.event).collect();
    dropped.sort_unstable();
    // Summing in sorted order keeps the total independent of input order.
    let total = counted.iter().map(|entry| entry.points).sum();
    AggregatedStanding {
        participant,
        counted,
        dropped,
        total,
    }
}

/// Aggregates a run's entries into one standing per participant, ordered
/// by participant id.
pub fn aggregate(
    entries: &[TournamentPointEntry],
    rule: AggregationRule,
) -> Result<Vec<AggregatedStanding>> {
    let mut seen: BTreeSet<(ParticipantId, EventIndex)> = BTreeSet::new();
    let mut grouped: BTreeMap<ParticipantId, Vec<TournamentPointEntry>> = BTreeMap::new();
    for entry in entries {
        if !seen.insert((entry.participant, entry.event)) {
            return Err(CoreError::DuplicateEventIndex {
                participant: entry.participant,
                event: entry.event,
            });
        }
        grouped.entry(entry.participant).or_default().push(*entry);
    }

    let standings: Vec<AggregatedStanding> = grouped
        .iter()
        .map(|(participant, group)| rule.apply(*participant, group))
        .collect();
    debug!(
        entry_count = entries.len(),
        participant_count = standings.len(),
        rule = ?rule,
        "points aggregated"
    );
    Ok(standings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(participant: u32, points: &[f64]) -> Vec<TournamentPointEntry> {
        points
            .iter()
            .zip(0u32..)
            .map(|(points, event)| {
                TournamentPointEntry::new(
                    ParticipantId::new(participant),
                    EventIndex::new(event),
                    *points,
                )
            })
            .collect()
    }

    fn counted_points(standing: &AggregatedStanding) -> Vec<f64> {
        standing.counted.iter().map(|entry| entry.points).collect()
    }

    #[test]
    fn keeps_best_three_of_four() {
        let standing = keep_best(ParticipantId::new(1), &entries(1, &[10.0, 8.0, 6.0, 2.0]), 3);
        assert_eq!(counted_points(&standing), vec![10.0, 8.0, 6.0]);
        assert_eq!(standing.dropped, vec![EventIndex::new(3)]);
        assert_eq!(standing.total, 24.0);
    }

    #[test]
    fn fewer_entries_than_k_drop_nothing() {
        let standing = keep_best(ParticipantId::new(1), &entries(1, &[4.0, 9.0]), 3);
        assert!(standing.dropped.is_empty());
        assert_eq!(standing.total, 13.0);
    }

    #[test]
    fn equal_points_keep_the_earlier_event() {
        let standing = keep_best(ParticipantId::new(1), &entries(1, &[5.0, 7.0, 5.0, 5.0]), 2);
        let counted: Vec<u32> = standing.counted.iter().map(|e| e.event.get()).collect();
        assert_eq!(counted, vec![1, 0]);
        assert_eq!(standing.dropped, vec![EventIndex::new(2), EventIndex::new(3)]);
    }

    #[test]
    fn sum_all_counts_everything() {
        let standing = sum_all(ParticipantId::new(2), &entries(2, &[1.0, 2.0, 3.0]));
        assert_eq!(standing.total, 6.0);
        assert_eq!(standing.entry_count(), 3);
        assert!(standing.dropped.is_empty());
    }

    #[test]
    fn aggregates_per_participant() {
        let mut all = entries(2, &[10.0, 3.0]);
        all.extend(entries(1, &[4.0]));
        let standings = aggregate(&all, AggregationRule::KeepBest(1)).unwrap();
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].participant, ParticipantId::new(1));
        assert_eq!(standings[1].total, 10.0);
        assert_eq!(standings[1].dropped, vec![EventIndex::new(1)]);
    }

    #[test]
    fn duplicate_event_is_rejected() {
        let mut all = entries(1, &[10.0, 3.0]);
        all.push(TournamentPointEntry::new(
            ParticipantId::new(1),
            EventIndex::new(1),
            5.0,
        ));
        let err = aggregate(&all, AggregationRule::SumAll).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateEventIndex {
                participant: ParticipantId::new(1),
                event: EventIndex::new(1),
            }
        );
    }
}
