//! Search time parsing (`MM:SS.CC`) and formatting.

use serde::{Deserialize, Serialize};

use crate::error::RowProblem;

/// How the digits after the decimal point of a search time are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFraction {
    /// Decimal fraction of a second: `.45` is 450 ms, `.5` is 500 ms.
    #[default]
    Hundredths,
    /// Digits taken as milliseconds without scaling, as older reports did.
    Raw,
}

/// Parses `MM:SS.CC` into milliseconds. An empty field is 0.
pub fn parse_time(value: &str, fraction: TimeFraction) -> Result<u64, RowProblem> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let invalid = || RowProblem::InvalidTime {
        value: trimmed.to_string(),
    };
    let (minutes, rest) = trimmed.split_once(':').ok_or_else(invalid)?;
    let (seconds, frac) = rest.split_once('.').ok_or_else(invalid)?;
    let minutes = parse_digits(minutes).ok_or_else(invalid)?;
    let seconds = parse_digits(seconds).ok_or_else(invalid)?;
    let frac_digits = frac.len();
    let frac = parse_digits(frac).ok_or_else(invalid)?;
    if seconds >= 60 {
        return Err(invalid());
    }
    let frac_ms = match fraction {
        TimeFraction::Hundredths => match frac_digits {
            1 => frac * 100,
            2 => frac * 10,
            3 => frac,
            _ => return Err(invalid()),
        },
        TimeFraction::Raw => frac,
    };
    minutes
        .checked_mul(60_000)
        .and_then(|ms| ms.checked_add(seconds * 1_000))
        .and_then(|ms| ms.checked_add(frac_ms))
        .ok_or_else(invalid)
}

fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Formats milliseconds as `MM:SS.CC`, truncating to hundredths.
pub fn format_time(time_ms: u64) -> String {
    let minutes = time_ms / 60_000;
    let seconds = (time_ms % 60_000) / 1_000;
    let hundredths = (time_ms % 1_000) / 10;
    format!("{minutes:02}:{seconds:02}.{hundredths:02}")
}
