//! Error types for result ingestion.

use std::path::PathBuf;
use thiserror::Error;

use scent_model::ModelError;

/// What is wrong with a single source row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowProblem {
    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid time '{value}' (expected MM:SS.CC)")]
    InvalidTime { value: String },

    #[error("expected at least {expected} columns, found {found}")]
    MissingColumns { expected: usize, found: usize },

    #[error("expected at most {max} event columns, found {found}")]
    TooManyEvents { max: usize, found: usize },
}

/// Errors that can occur while loading result sheets.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Sheet Errors ===
    #[error("failed to parse CSV: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// A row that cannot be turned into results.
    #[error("malformed row at line {line}: {problem}")]
    MalformedRow { line: u64, problem: RowProblem },

    /// The sheet has no header row or no event columns.
    #[error("sheet has no events")]
    NoEvents,

    #[error("round {round} is out of range for {searches_per_round} searches per round")]
    RoundOutOfRange { round: u32, searches_per_round: u32 },

    // === Discovery Errors ===
    #[error("no round number at the end of file name {path}")]
    MissingRoundNumber { path: PathBuf },

    /// Round numbers start at 1 and must fit the run-wide event numbering.
    #[error("invalid round number '{value}' in file name {path}")]
    InvalidRoundNumber { path: PathBuf, value: String },

    #[error("round {round} appears in both {first} and {second}")]
    DuplicateRound {
        round: u32,
        first: PathBuf,
        second: PathBuf,
    },

    // === Configuration Errors ===
    #[error("failed to parse configuration {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IngestError {
    pub(crate) fn malformed(line: u64, problem: RowProblem) -> Self {
        Self::MalformedRow { line, problem }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::malformed(
            4,
            RowProblem::InvalidNumber {
                field: "errors",
                value: "x".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "malformed row at line 4: invalid errors value 'x'"
        );
    }

    #[test]
    fn test_error_from_model() {
        let model_err = ModelError::UnknownLevel {
            value: "C".to_string(),
        };
        let ingest_err: IngestError = model_err.into();
        assert!(matches!(ingest_err, IngestError::Model(_)));
    }
}
