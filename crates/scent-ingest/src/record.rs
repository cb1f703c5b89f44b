//! Field-level parsing of one event's cells into a [`RawResult`].

use scent_model::{ParticipantId, RawResult};

use crate::error::RowProblem;
use crate::time::{TimeFraction, parse_time};

/// Number of columns one event occupies in a search sheet row.
pub const EVENT_GROUP_WIDTH: usize = 4;

/// Parses a non-negative points value. An empty field is 0.
pub fn parse_points(value: &str) -> Result<f64, RowProblem> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(points) if points.is_finite() && points >= 0.0 => Ok(points),
        _ => Err(RowProblem::InvalidNumber {
            field: "points",
            value: trimmed.to_string(),
        }),
    }
}

/// Parses a non-negative error count. An empty field is 0.
pub fn parse_errors(value: &str) -> Result<u32, RowProblem> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u32>().map_err(|_| RowProblem::InvalidNumber {
        field: "errors",
        value: trimmed.to_string(),
    })
}

/// Any non-empty marker sets the flag.
pub fn parse_flag(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Parses the four cells (points, errors, time, special) starting at `start`.
pub fn parse_event_group(
    cells: &[String],
    start: usize,
    participant: ParticipantId,
    fraction: TimeFraction,
) -> Result<RawResult, RowProblem> {
    let end = start + EVENT_GROUP_WIDTH;
    let group = cells.get(start..end).ok_or(RowProblem::MissingColumns {
        expected: end,
        found: cells.len(),
    })?;
    Ok(RawResult {
        participant,
        points: parse_points(&group[0])?,
        errors: parse_errors(&group[1])?,
        time_ms: parse_time(&group[2], fraction)?,
        special: parse_flag(&group[3]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_full_group() {
        let row = cells(&["3", "Anna", "Rex", "25", "1", "01:02.50", "x"]);
        let result = parse_event_group(&row, 3, ParticipantId::new(1), TimeFraction::Hundredths)
            .expect("parse group");
        assert_eq!(result.points, 25.0);
        assert_eq!(result.errors, 1);
        assert_eq!(result.time_ms, 62_500);
        assert!(result.special);
    }

    #[test]
    fn empty_fields_default_to_zero() {
        let row = cells(&["", "", "", ""]);
        let result = parse_event_group(&row, 0, ParticipantId::new(2), TimeFraction::Hundredths)
            .expect("parse group");
        assert_eq!(result, RawResult::new(ParticipantId::new(2)));
    }

    #[test]
    fn fractional_points_are_kept() {
        assert_eq!(parse_points("12.5"), Ok(12.5));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            parse_points("ten"),
            Err(RowProblem::InvalidNumber { field: "points", .. })
        ));
        assert!(parse_points("-1").is_err());
        assert!(parse_points("NaN").is_err());
        assert!(matches!(
            parse_errors("1.5"),
            Err(RowProblem::InvalidNumber { field: "errors", .. })
        ));
        assert!(parse_errors("-2").is_err());
    }

    #[test]
    fn short_group_is_missing_columns() {
        let row = cells(&["1", "Anna", "Rex", "20", "0"]);
        let err = parse_event_group(&row, 3, ParticipantId::new(1), TimeFraction::Hundredths)
            .unwrap_err();
        assert_eq!(
            err,
            RowProblem::MissingColumns {
                expected: 7,
                found: 5
            }
        );
    }
}
