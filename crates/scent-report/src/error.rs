//! Error types for report output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("row has {found} cells, report has {expected} columns")]
    RowWidth { expected: usize, found: usize },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV output failed: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("JSON output failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
