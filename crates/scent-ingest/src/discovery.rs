//! Round file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// A points sheet found on disk and the round it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFile {
    pub round: u32,
    pub path: PathBuf,
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Check for .csv extension (case-insensitive)
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Finds the round files of one level, ordered by round number.
///
/// A file belongs to the level when its name starts with `prefix`
/// (case-insensitive); the round number is the run of digits that ends
/// the file stem, so `NW1_round3.csv` is round 3.
pub fn discover_round_files(dir: &Path, prefix: &str) -> Result<Vec<RoundFile>> {
    let prefix = prefix.to_uppercase();
    let mut rounds: Vec<RoundFile> = Vec::new();

    for path in list_csv_files(dir)? {
        let stem = path
            .file_stem()
            .and_then(|v| v.to_str())
            .unwrap_or("")
            .to_string();
        if !stem.to_uppercase().starts_with(&prefix) {
            continue;
        }
        let digits = trailing_digits(stem.get(prefix.len()..).unwrap_or(""));
        if digits.is_empty() {
            return Err(IngestError::MissingRoundNumber { path });
        }
        let round = match digits.parse::<u32>() {
            Ok(round) if round > 0 => round,
            _ => {
                return Err(IngestError::InvalidRoundNumber {
                    value: digits.to_string(),
                    path,
                });
            }
        };
        if let Some(existing) = rounds.iter().find(|file| file.round == round) {
            return Err(IngestError::DuplicateRound {
                round,
                first: existing.path.clone(),
                second: path,
            });
        }
        rounds.push(RoundFile { round, path });
    }

    rounds.sort_by_key(|file| file.round);
    Ok(rounds)
}

fn trailing_digits(stem: &str) -> &str {
    let start = stem.trim_end_matches(|ch: char| ch.is_ascii_digit()).len();
    &stem[start..]
}
