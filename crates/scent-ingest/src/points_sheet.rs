//! Points sheets: tournament points of one round, one file per round.
//!
//! Layout:
//!
//! ```text
//! line 1:  Handler,Dog,<search 1>,...,<search n>,Total
//! line 2+: <handler>,<dog>,<points 1>,...,<points n>,<round total>
//! ```
//!
//! An empty points cell means the team did not run that search. Searches get
//! a run-wide event index of `(round - 1) * searches_per_round + position`,
//! so the sheets of one level line up column by column.

use std::path::Path;

use scent_model::{EventIndex, ParticipantId, ParticipantRegistry, TournamentPointEntry};

use crate::error::{IngestError, Result, RowProblem};
use crate::record::parse_points;
use crate::sheet::{SourceRow, read_rows};

/// Column of the first search's points.
pub const FIRST_POINTS_COLUMN: usize = 2;

/// One search column of a points sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventColumn {
    pub index: EventIndex,
    pub name: String,
}

/// One team's line in a points sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsRow {
    pub participant: ParticipantId,
    /// Points per search position; `None` where the team did not run.
    pub points: Vec<Option<f64>>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointsSheet {
    pub round: u32,
    pub events: Vec<EventColumn>,
    pub rows: Vec<PointsRow>,
}

impl PointsSheet {
    /// One entry per search a team ran.
    pub fn search_entries(&self) -> Vec<TournamentPointEntry> {
        let mut entries = Vec::new();
        for row in &self.rows {
            for (points, column) in row.points.iter().zip(&self.events) {
                if let Some(points) = points {
                    entries.push(TournamentPointEntry::new(
                        row.participant,
                        column.index,
                        *points,
                    ));
                }
            }
        }
        entries
    }

    /// One entry per team carrying the round total, indexed by round number.
    pub fn round_entries(&self) -> Vec<TournamentPointEntry> {
        self.rows
            .iter()
            .map(|row| {
                TournamentPointEntry::new(row.participant, EventIndex::new(self.round), row.total)
            })
            .collect()
    }
}

pub fn load_points_sheet(
    path: &Path,
    round: u32,
    searches_per_round: u32,
    registry: &mut ParticipantRegistry,
) -> Result<PointsSheet> {
    let rows = read_rows(path)?;
    parse_points_sheet(&rows, round, searches_per_round, registry)
}

pub fn parse_points_sheet(
    rows: &[SourceRow],
    round: u32,
    searches_per_round: u32,
    registry: &mut ParticipantRegistry,
) -> Result<PointsSheet> {
    let header = rows.first().ok_or(IngestError::NoEvents)?;
    let max_events = searches_per_round as usize;
    let first_index =
        first_event_index(round, searches_per_round).ok_or(IngestError::RoundOutOfRange {
            round,
            searches_per_round,
        })?;

    let header_events = header.len().saturating_sub(FIRST_POINTS_COLUMN + 1);
    if header_events > max_events {
        return Err(IngestError::malformed(
            header.line,
            RowProblem::TooManyEvents {
                max: max_events,
                found: header_events,
            },
        ));
    }
    let events: Vec<EventColumn> = (0..max_events)
        .map(|position| {
            let name = header.cell(FIRST_POINTS_COLUMN + position);
            let name = if name.is_empty() || position >= header_events {
                format!("Search {}", first_index + position as u32 + 1)
            } else {
                name.to_string()
            };
            EventColumn {
                index: EventIndex::new(first_index + position as u32),
                name,
            }
        })
        .collect();

    let mut parsed = Vec::with_capacity(rows.len().saturating_sub(1));
    for row in rows.iter().skip(1) {
        parsed.push(parse_points_row(row, max_events, registry)?);
    }
    let used = parsed
        .iter()
        .map(|row| row.points.len())
        .max()
        .unwrap_or(0)
        .max(header_events);
    let events = events.into_iter().take(used).collect();

    Ok(PointsSheet {
        round,
        events,
        rows: parsed,
    })
}

/// Run-wide index of a round's first search, if every search of the round
/// gets an index.
fn first_event_index(round: u32, searches_per_round: u32) -> Option<u32> {
    if round == 0 {
        return None;
    }
    round.checked_mul(searches_per_round)?;
    Some((round - 1) * searches_per_round)
}

fn parse_points_row(
    row: &SourceRow,
    max_events: usize,
    registry: &mut ParticipantRegistry,
) -> Result<PointsRow> {
    let min_columns = FIRST_POINTS_COLUMN + 1;
    if row.len() < min_columns {
        return Err(IngestError::malformed(
            row.line,
            RowProblem::MissingColumns {
                expected: min_columns,
                found: row.len(),
            },
        ));
    }
    let total_column = row.len() - 1;
    let event_count = total_column - FIRST_POINTS_COLUMN;
    if event_count > max_events {
        return Err(IngestError::malformed(
            row.line,
            RowProblem::TooManyEvents {
                max: max_events,
                found: event_count,
            },
        ));
    }
    let participant = registry.register(row.cell(0), row.cell(1), None);
    let mut points = Vec::with_capacity(event_count);
    for idx in FIRST_POINTS_COLUMN..total_column {
        let cell = row.cell(idx);
        if cell.is_empty() {
            points.push(None);
        } else {
            let value =
                parse_points(cell).map_err(|problem| IngestError::malformed(row.line, problem))?;
            points.push(Some(value));
        }
    }
    let total = parse_points(row.cell(total_column))
        .map_err(|problem| IngestError::malformed(row.line, problem))?;
    Ok(PointsRow {
        participant,
        points,
        total,
    })
}
