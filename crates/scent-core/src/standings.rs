//! Final placements from aggregated totals.

use scent_model::{AggregatedStanding, Placement};

/// Ranks standings by total, highest first.
///
/// Equal totals are ordered by participant id, so the team registered
/// first is placed higher. Ranks run 1..=M without repeats.
pub fn build_standings(mut standings: Vec<AggregatedStanding>) -> Vec<Placement> {
    standings.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then(a.participant.cmp(&b.participant))
    });
    standings
        .into_iter()
        .zip(1u32..)
        .map(|(standing, rank)| Placement { rank, standing })
        .collect()
}
