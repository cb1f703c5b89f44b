//! Report tables for rounds, seasons and round series.

use scent_core::{EventLabel, PointTable, RoundScore, RoundStandings, ScoredEvent, SeasonStandings};
use scent_model::{EventIndex, ParticipantId, ParticipantRegistry, Placement};

use crate::cell::Cell;
use crate::error::Result;
use crate::report::Report;

const EVENT_COLUMNS: [&str; 9] = [
    "Rank", "Start", "Handler", "Dog", "Points", "Errors", "Time", "SSE", "TP",
];

fn team_cells(registry: &ParticipantRegistry, participant: ParticipantId) -> [Cell; 2] {
    match registry.get(participant) {
        Some(team) => [Cell::text(&team.handler), Cell::text(&team.animal)],
        None => [Cell::text(participant.to_string()), Cell::Empty],
    }
}

fn start_cell(registry: &ParticipantRegistry, participant: ParticipantId) -> Cell {
    registry
        .get(participant)
        .and_then(|team| team.start_number)
        .map_or(Cell::Empty, |number| Cell::Integer(u64::from(number)))
}

/// Ranked results of one search.
pub fn event_report(event: &ScoredEvent, registry: &ParticipantRegistry) -> Result<Report> {
    let mut report = Report::new(event.name.as_str(), EVENT_COLUMNS);
    for scored in &event.results {
        let participant = scored.result.participant;
        let [handler, animal] = team_cells(registry, participant);
        report.push_row(vec![
            Cell::Integer(u64::from(scored.rank)),
            start_cell(registry, participant),
            handler,
            animal,
            Cell::Number(scored.result.points),
            Cell::Integer(u64::from(scored.result.errors)),
            Cell::Time(scored.result.time_ms),
            Cell::Flag(scored.result.special),
            Cell::Number(scored.tournament_points),
        ])?;
    }
    Ok(report)
}

/// Ranked round totals.
pub fn round_total_report(round: &RoundScore, registry: &ParticipantRegistry) -> Result<Report> {
    let mut report = Report::new(
        "Round total",
        [
            "Rank", "Start", "Handler", "Dog", "Points", "Errors", "Time", "SSE", "Searches", "TP",
        ],
    );
    for ranked in &round.totals {
        let total = &ranked.total;
        let [handler, animal] = team_cells(registry, total.participant);
        report.push_row(vec![
            Cell::Integer(u64::from(ranked.rank)),
            start_cell(registry, total.participant),
            handler,
            animal,
            Cell::Number(total.points),
            Cell::Integer(u64::from(total.errors)),
            Cell::Time(total.time_ms),
            Cell::Integer(u64::from(total.special_count)),
            Cell::Integer(total.event_count as u64),
            Cell::Number(total.tournament_points),
        ])?;
    }
    Ok(report)
}

/// One report per search followed by the round total.
pub fn round_reports(round: &RoundScore, registry: &ParticipantRegistry) -> Result<Vec<Report>> {
    let mut reports = round
        .events
        .iter()
        .map(|event| event_report(event, registry))
        .collect::<Result<Vec<_>>>()?;
    reports.push(round_total_report(round, registry)?);
    Ok(reports)
}

fn event_cells(
    events: &[EventLabel],
    points: &PointTable,
    placement: &Placement,
) -> impl Iterator<Item = Cell> {
    events.iter().map(move |event| {
        match points.get(placement.participant(), event.index) {
            Some(value) if placement.standing.is_dropped(event.index) => Cell::Dropped(value),
            value => Cell::optional_number(value),
        }
    })
}

fn dropped_text(dropped: &[EventIndex], offset: u32) -> Cell {
    let numbers: Vec<String> = dropped
        .iter()
        .map(|event| (event.get() + offset).to_string())
        .collect();
    if numbers.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(numbers.join(", "))
    }
}

/// Best-K season standings and the season totals.
///
/// Searches are numbered from 1 across the season; dropped searches are
/// listed by that number.
pub fn season_reports(
    season: &SeasonStandings,
    registry: &ParticipantRegistry,
) -> Result<Vec<Report>> {
    let mut columns: Vec<String> = vec![
        "Place".to_string(),
        "Handler".to_string(),
        "Dog".to_string(),
        format!("Best {}", season.keep),
        "Season total".to_string(),
    ];
    columns.extend(season.categories.iter().cloned());
    columns.push("Dropped".to_string());
    columns.extend(
        season
            .events
            .iter()
            .map(|event| format!("{}: {}", event.index.get() + 1, event.name)),
    );

    let mut best = Report::new(format!("Best {} searches", season.keep), columns);
    for row in &season.rows {
        let placement = &row.placement;
        let [handler, animal] = team_cells(registry, placement.participant());
        let mut cells = vec![
            Cell::Integer(u64::from(placement.rank)),
            handler,
            animal,
            Cell::Number(placement.total()),
            Cell::Number(row.season_total),
        ];
        cells.extend(row.category_totals.iter().copied().map(Cell::Number));
        cells.push(dropped_text(&placement.standing.dropped, 1));
        cells.extend(event_cells(&season.events, &season.points, placement));
        best.push_row(cells)?;
    }

    let mut totals = Report::new("Season total", ["Place", "Handler", "Dog", "Total"]);
    for placement in &season.totals {
        let [handler, animal] = team_cells(registry, placement.participant());
        totals.push_row(vec![
            Cell::Integer(u64::from(placement.rank)),
            handler,
            animal,
            Cell::Number(placement.total()),
        ])?;
    }
    Ok(vec![best, totals])
}

/// Best-K standings over round totals. Dropped rounds are listed by round
/// number.
pub fn round_standings_report(
    standings: &RoundStandings,
    registry: &ParticipantRegistry,
) -> Result<Report> {
    let mut columns: Vec<String> = ["Place", "Handler", "Dog", "Total", "Dropped"]
        .into_iter()
        .map(str::to_string)
        .collect();
    columns.extend(standings.rounds.iter().map(|round| round.name.clone()));

    let mut report = Report::new(format!("Best {} rounds", standings.keep), columns);
    for placement in &standings.placements {
        let [handler, animal] = team_cells(registry, placement.participant());
        let mut cells = vec![
            Cell::Integer(u64::from(placement.rank)),
            handler,
            animal,
            Cell::Number(placement.total()),
            dropped_text(&placement.standing.dropped, 0),
        ];
        cells.extend(event_cells(&standings.rounds, &standings.points, placement));
        report.push_row(cells)?;
    }
    Ok(report)
}
