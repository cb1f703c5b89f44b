//! Result ingestion for scent-work tournaments.
//!
//! This crate turns CSV sheets into the immutable records of `scent-model`.
//!
//! # Features
//!
//! - **Search sheets**: one round with up to four searches per row
//! - **Points sheets**: one round of tournament points per file
//! - **Round discovery**: find a level's round files and their round numbers
//! - **Configuration**: optional TOML competition settings
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use scent_ingest::{TimeFraction, load_search_sheet};
//! use scent_model::ParticipantRegistry;
//!
//! let mut registry = ParticipantRegistry::new();
//! let sheet = load_search_sheet(Path::new("round1.csv"), TimeFraction::Hundredths, &mut registry)?;
//! ```

mod config;
mod discovery;
mod error;
mod points_sheet;
mod record;
mod search_sheet;
mod sheet;
mod time;

// === Error Types ===
pub use error::{IngestError, Result, RowProblem};

// === Record Parsing ===
pub use record::{EVENT_GROUP_WIDTH, parse_errors, parse_event_group, parse_flag, parse_points};
pub use time::{TimeFraction, format_time, parse_time};

// === Sheets ===
pub use points_sheet::{
    EventColumn, FIRST_POINTS_COLUMN, PointsRow, PointsSheet, load_points_sheet,
    parse_points_sheet,
};
pub use search_sheet::{
    FIRST_GROUP_COLUMN, MAX_SEARCHES, SearchSheet, load_search_sheet, parse_search_sheet,
};
pub use sheet::{SourceRow, read_rows, read_rows_from};

// === Discovery ===
pub use discovery::{RoundFile, discover_round_files, list_csv_files};

// === Configuration ===
pub use config::{CompetitionConfig, KeepConfig, load_config, parse_config};
