//! Search sheets: one competition round, up to four searches per row.
//!
//! Layout:
//!
//! ```text
//! line 1:  ,,,<search 1>,,,,<search 2>,,,,<search 3>,,,,<search 4>
//! line 2:  column labels (ignored)
//! line 3+: <start no>,<handler>,<dog>,<points>,<errors>,<time>,<special>,...
//! ```
//!
//! Search `k` (0-based) occupies the four columns starting at `3 + 4k`.
//! A data row that ends before a search's group leaves the team out of that
//! search; a row that ends inside a group is malformed.

use std::path::Path;

use tracing::debug;

use scent_model::{EventIndex, EventResults, ParticipantRegistry};

use crate::error::{IngestError, Result, RowProblem};
use crate::record::{EVENT_GROUP_WIDTH, parse_event_group};
use crate::sheet::{SourceRow, read_rows};
use crate::time::TimeFraction;

/// Column of the first search group.
pub const FIRST_GROUP_COLUMN: usize = 3;

/// Maximum number of searches in one search sheet.
pub const MAX_SEARCHES: usize = 4;

const HEADER_ROWS: usize = 2;

/// Parsed search sheet: one result set per declared search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSheet {
    pub events: Vec<EventResults>,
}

pub fn load_search_sheet(
    path: &Path,
    fraction: TimeFraction,
    registry: &mut ParticipantRegistry,
) -> Result<SearchSheet> {
    let rows = read_rows(path)?;
    parse_search_sheet(&rows, fraction, registry)
}

/// Builds per-search result sets from already-read rows.
pub fn parse_search_sheet(
    rows: &[SourceRow],
    fraction: TimeFraction,
    registry: &mut ParticipantRegistry,
) -> Result<SearchSheet> {
    let header = rows.first().ok_or(IngestError::NoEvents)?;
    let names = search_names(header);
    if names.is_empty() {
        return Err(IngestError::NoEvents);
    }
    let mut events: Vec<EventResults> = names
        .into_iter()
        .zip(0u32..)
        .map(|(name, idx)| EventResults {
            index: EventIndex::new(idx),
            name,
            results: Vec::new(),
        })
        .collect();

    for row in rows.iter().skip(HEADER_ROWS) {
        let min_columns = FIRST_GROUP_COLUMN + EVENT_GROUP_WIDTH;
        if row.len() < min_columns {
            return Err(IngestError::malformed(
                row.line,
                RowProblem::MissingColumns {
                    expected: min_columns,
                    found: row.len(),
                },
            ));
        }
        let start_number = parse_start_number(row)?;
        let participant = registry.register(row.cell(1), row.cell(2), start_number);
        for (k, event) in events.iter_mut().enumerate() {
            let start = FIRST_GROUP_COLUMN + k * EVENT_GROUP_WIDTH;
            if row.len() <= start {
                break;
            }
            let result = parse_event_group(&row.cells, start, participant, fraction)
                .map_err(|problem| IngestError::malformed(row.line, problem))?;
            event.results.push(result);
        }
    }

    for event in &events {
        debug!(
            event = %event.name,
            result_count = event.results.len(),
            "search loaded"
        );
    }
    Ok(SearchSheet { events })
}

/// Names of the declared searches, stopping at the first empty header cell.
fn search_names(header: &SourceRow) -> Vec<String> {
    (0..MAX_SEARCHES)
        .map(|k| header.cell(FIRST_GROUP_COLUMN + k * EVENT_GROUP_WIDTH))
        .take_while(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_start_number(row: &SourceRow) -> Result<Option<u32>> {
    let value = row.cell(0);
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<u32>().map(Some).map_err(|_| {
        IngestError::malformed(
            row.line,
            RowProblem::InvalidNumber {
                field: "start number",
                value: value.to_string(),
            },
        )
    })
}
