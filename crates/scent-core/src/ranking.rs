//! Ranking of the results of a single event.

use std::cmp::Ordering;

use scent_model::{EventRanking, RawResult};

/// Orders two results: more points first, then fewer errors, then the
/// shorter time.
pub fn compare_results(a: &RawResult, b: &RawResult) -> Ordering {
    b.points
        .total_cmp(&a.points)
        .then_with(|| a.errors.cmp(&b.errors))
        .then_with(|| a.time_ms.cmp(&b.time_ms))
}

/// Ranks one event's results.
///
/// The sort is stable, so results with identical points, errors and time
/// keep their input order and still get distinct consecutive ranks.
pub fn rank_event(results: &[RawResult]) -> EventRanking {
    let mut ordered = results.to_vec();
    ordered.sort_by(compare_results);
    EventRanking::from_ordered(ordered)
}
