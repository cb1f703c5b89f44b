//! End-to-end scoring scenarios.

use scent_core::{
    AggregationRule, PointPolicy, aggregate, build_standings, keep_best, rank_event, score_round,
    sum_all,
};
use scent_model::{EventIndex, EventResults, Level, ParticipantId, RawResult, TournamentPointEntry};

fn result(id: u32, points: f64, errors: u32, time_ms: u64, special: bool) -> RawResult {
    RawResult {
        participant: ParticipantId::new(id),
        points,
        time_ms,
        errors,
        special,
    }
}

#[test]
fn level_a_winner_without_bonus() {
    let policy = PointPolicy::for_level(Level::A);
    assert_eq!(policy.award(1, &result(1, 10.0, 0, 0, false)), 15.0);
}

#[test]
fn level_b_full_score_third_place() {
    let policy = PointPolicy::for_level(Level::B);
    assert_eq!(policy.award(3, &result(1, 25.0, 2, 0, true)), 31.0);
}

#[test]
fn level_b_many_errors_hit_the_floor() {
    let policy = PointPolicy::for_level(Level::B);
    assert_eq!(policy.award(10, &result(1, 5.0, 10, 0, false)), 3.0);
}

#[test]
fn keep_best_three_of_four() {
    let participant = ParticipantId::new(1);
    let entries: Vec<TournamentPointEntry> = [10.0, 8.0, 6.0, 2.0]
        .into_iter()
        .zip(0u32..)
        .map(|(points, event)| {
            TournamentPointEntry::new(participant, EventIndex::new(event), points)
        })
        .collect();
    let standing = keep_best(participant, &entries, 3);
    let counted: Vec<f64> = standing.counted.iter().map(|e| e.points).collect();
    assert_eq!(counted, vec![10.0, 8.0, 6.0]);
    assert_eq!(standing.dropped, vec![EventIndex::new(3)]);
    assert_eq!(standing.total, 24.0);
}

#[test]
fn placement_total_survives_a_second_sum() {
    let participant = ParticipantId::new(5);
    let entries = vec![
        TournamentPointEntry::new(participant, EventIndex::new(0), 12.0),
        TournamentPointEntry::new(participant, EventIndex::new(1), 7.0),
    ];
    let placements = build_standings(aggregate(&entries, AggregationRule::KeepBest(12)).unwrap());
    let placement = &placements[0];

    let synthetic = TournamentPointEntry::new(participant, EventIndex::new(0), placement.total());
    assert_eq!(sum_all(participant, &[synthetic]).total, placement.total());
}

#[test]
fn whole_round_to_standings() {
    let events = vec![
        EventResults {
            index: EventIndex::new(0),
            name: "Inomhus".to_string(),
            results: vec![
                result(1, 25.0, 0, 70_500, true),
                result(2, 0.0, 0, 0, false),
                result(3, 25.0, 1, 60_000, false),
            ],
        },
        EventResults {
            index: EventIndex::new(1),
            name: "Utomhus".to_string(),
            results: vec![
                result(1, 20.0, 1, 120_000, false),
                result(2, 25.0, 0, 90_000, false),
            ],
        },
    ];
    let policy = PointPolicy::for_level(Level::A);
    let round = score_round(&events, policy).unwrap();

    let ranking = rank_event(&events[0].results);
    assert_eq!(ranking.rank_of(ParticipantId::new(3)), Some(2));

    // 1: 20 + 14, 2: 3 + 15, 3: 14
    let placements =
        build_standings(aggregate(&round.search_entries(), AggregationRule::SumAll).unwrap());
    let totals: Vec<(u32, f64)> = placements
        .iter()
        .map(|p| (p.participant().get(), p.total()))
        .collect();
    assert_eq!(totals, vec![(1, 34.0), (2, 18.0), (3, 14.0)]);
}
