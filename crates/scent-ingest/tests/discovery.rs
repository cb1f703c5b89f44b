//! Tests for round file discovery.

use scent_ingest::{IngestError, discover_round_files, list_csv_files, load_points_sheet};
use scent_model::ParticipantRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "Handler,Dog,S1,Total\n").expect("write file");
    path
}

#[test]
fn discovers_rounds_of_one_level_in_round_order() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "NW1_10.csv");
    touch(dir.path(), "NW1_2.csv");
    touch(dir.path(), "nw1-round1.CSV");
    touch(dir.path(), "NW2_1.csv");
    touch(dir.path(), "notes.txt");

    let rounds = discover_round_files(dir.path(), "NW1").expect("discover rounds");
    let numbers: Vec<u32> = rounds.iter().map(|file| file.round).collect();
    assert_eq!(numbers, vec![1, 2, 10]);

    let level_b = discover_round_files(dir.path(), "NW2").expect("discover rounds");
    assert_eq!(level_b.len(), 1);
}

#[test]
fn prefix_digits_are_not_a_round_number() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "NW1.csv");

    let err = discover_round_files(dir.path(), "NW1").unwrap_err();
    assert!(matches!(err, IngestError::MissingRoundNumber { .. }));
}

#[test]
fn duplicate_round_numbers_are_rejected() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "NW2_a3.csv");
    touch(dir.path(), "NW2_b3.csv");

    let err = discover_round_files(dir.path(), "NW2").unwrap_err();
    assert!(matches!(err, IngestError::DuplicateRound { round: 3, .. }));
}

#[test]
fn round_zero_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = touch(dir.path(), "NW1_0.csv");

    let err = discover_round_files(dir.path(), "NW1").unwrap_err();
    match err {
        IngestError::InvalidRoundNumber { path: found, value } => {
            assert_eq!(found, path);
            assert_eq!(value, "0");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn round_number_too_large_for_u32_is_rejected() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "NW1_99999999999.csv");

    let err = discover_round_files(dir.path(), "NW1").unwrap_err();
    assert!(err.to_string().contains("NW1_99999999999.csv"));
    assert!(matches!(err, IngestError::InvalidRoundNumber { .. }));
}

#[test]
fn round_past_the_event_numbering_fails_to_load() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "NW1_4294967295.csv");

    let rounds = discover_round_files(dir.path(), "NW1").expect("discover rounds");
    assert_eq!(rounds[0].round, u32::MAX);

    let mut registry = ParticipantRegistry::new();
    let err = load_points_sheet(&rounds[0].path, rounds[0].round, 4, &mut registry).unwrap_err();
    assert!(matches!(
        err,
        IngestError::RoundOutOfRange {
            round: u32::MAX,
            searches_per_round: 4,
        }
    ));
}

#[test]
fn lists_only_csv_files_sorted() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "b.csv");
    touch(dir.path(), "a.csv");
    touch(dir.path(), "c.txt");

    let files = list_csv_files(dir.path()).expect("list csv");
    let names: Vec<String> = files
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.csv", "b.csv"]);
}

#[test]
fn missing_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = list_csv_files(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}
