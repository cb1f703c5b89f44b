//! Typed report cells.

use serde::Serialize;

use scent_ingest::format_time;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Integer(u64),
    Number(f64),
    /// Elapsed time in milliseconds.
    Time(u64),
    Text(String),
    Flag(bool),
    /// Points left out of a best-K total.
    Dropped(f64),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn optional_number(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, Cell::Dropped(_))
    }

    /// Plain text rendering. Dropped points are shown in parentheses.
    pub fn display(&self) -> String {
        match self {
            Cell::Integer(value) => value.to_string(),
            Cell::Number(value) => format_points(*value),
            Cell::Time(value) => format_time(*value),
            Cell::Text(value) => value.clone(),
            Cell::Flag(true) => "x".to_string(),
            Cell::Flag(false) | Cell::Empty => String::new(),
            Cell::Dropped(value) => format!("({})", format_points(*value)),
        }
    }

    /// Rendering without the dropped marker, for sinks with their own styling.
    pub fn display_plain(&self) -> String {
        match self {
            Cell::Dropped(value) => format_points(*value),
            other => other.display(),
        }
    }
}

/// Formats points without trailing zeros: `15`, `12.5`, `3.25`.
pub fn format_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
