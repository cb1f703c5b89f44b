//! Report output for scent-work tournaments.
//!
//! Scoring results are turned into [`Report`] tables of typed [`Cell`]s and
//! handed to a [`ReportSink`]:
//!
//! - **CSV** ([`CsvSink`]): one block per report, dropped points in parentheses
//! - **JSON** ([`JsonSink`]): all reports in one document
//!
//! [`write_points_sheet`] exports a scored round in the layout the season
//! and round commands read back.

mod cell;
mod error;
mod points_sheet;
mod report;
mod sink;
mod tables;

pub use cell::{Cell, format_points};
pub use error::{ReportError, Result};
pub use points_sheet::{write_points_sheet, write_points_sheet_file};
pub use report::Report;
pub use sink::{CsvSink, JsonSink, ReportSink};
pub use tables::{
    event_report, round_reports, round_standings_report, round_total_report, season_reports,
};
