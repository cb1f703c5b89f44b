//! Tests for search sheet parsing.

use scent_ingest::{IngestError, RowProblem, TimeFraction, parse_search_sheet, read_rows_from};
use scent_model::{EventIndex, ParticipantId, ParticipantRegistry};

const ROUND: &str = "\
,,,Inomhus,,,,Utomhus,,,,Fordon,,,,Behallare,,,
Nr,Forare,Hund,Poang,Fel,Tid,SSE,Poang,Fel,Tid,SSE,Poang,Fel,Tid,SSE,Poang,Fel,Tid,SSE
1,Anna,Rex,25,0,01:10.50,x,20,1,02:00.00,,25,0,00:45.10,x,0,0,,
2,Bo,Kiwi,,,,,25,0,01:30.00,,,,,,25,1,00:59.99,
";

#[test]
fn reads_all_declared_searches() {
    let rows = read_rows_from(ROUND.as_bytes()).expect("read rows");
    let mut registry = ParticipantRegistry::new();
    let sheet =
        parse_search_sheet(&rows, TimeFraction::Hundredths, &mut registry).expect("parse sheet");

    let names: Vec<&str> = sheet.events.iter().map(|event| event.name.as_str()).collect();
    assert_eq!(names, vec!["Inomhus", "Utomhus", "Fordon", "Behallare"]);
    assert_eq!(sheet.events[2].index, EventIndex::new(2));
    assert_eq!(registry.len(), 2);

    let indoor = &sheet.events[0];
    assert_eq!(indoor.results.len(), 2);
    let anna = indoor.results[0];
    assert_eq!(anna.participant, ParticipantId::new(1));
    assert_eq!(anna.points, 25.0);
    assert_eq!(anna.time_ms, 70_500);
    assert!(anna.special);

    let bo = indoor.results[1];
    assert_eq!(bo.points, 0.0);
    assert_eq!(bo.time_ms, 0);
    assert!(!bo.special);

    let container = &sheet.events[3];
    assert_eq!(container.results[1].errors, 1);
    assert_eq!(container.results[1].time_ms, 59_990);
    assert_eq!(
        registry.get(ParticipantId::new(2)).unwrap().start_number,
        Some(2)
    );
}

#[test]
fn raw_time_reading_is_configurable() {
    let rows = read_rows_from(ROUND.as_bytes()).expect("read rows");
    let mut registry = ParticipantRegistry::new();
    let sheet = parse_search_sheet(&rows, TimeFraction::Raw, &mut registry).expect("parse sheet");
    assert_eq!(sheet.events[0].results[0].time_ms, 70_050);
}

#[test]
fn short_rows_leave_team_out_of_later_searches() {
    let text = "\
,,,S1,,,,S2,,,
labels
1,Anna,Rex,10,0,01:00.00,
2,Bo,Kiwi,12,0,01:00.00,,8,0,00:30.00,
";
    let rows = read_rows_from(text.as_bytes()).expect("read rows");
    let mut registry = ParticipantRegistry::new();
    let sheet =
        parse_search_sheet(&rows, TimeFraction::Hundredths, &mut registry).expect("parse sheet");
    assert_eq!(sheet.events.len(), 2);
    assert_eq!(sheet.events[0].results.len(), 2);
    assert_eq!(sheet.events[1].results.len(), 1);
    assert_eq!(sheet.events[1].results[0].participant, ParticipantId::new(2));
}

#[test]
fn unparseable_points_are_malformed() {
    let text = "\
,,,S1,,,
labels
1,Anna,Rex,ten,0,01:00.00,
";
    let rows = read_rows_from(text.as_bytes()).expect("read rows");
    let mut registry = ParticipantRegistry::new();
    let err = parse_search_sheet(&rows, TimeFraction::Hundredths, &mut registry).unwrap_err();
    match err {
        IngestError::MalformedRow { line, problem } => {
            assert_eq!(line, 3);
            assert!(matches!(
                problem,
                RowProblem::InvalidNumber { field: "points", .. }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn truncated_group_is_malformed() {
    let text = "\
,,,S1,,,,S2,,,
labels
1,Anna,Rex,10,0,01:00.00,,8,0
";
    let rows = read_rows_from(text.as_bytes()).expect("read rows");
    let mut registry = ParticipantRegistry::new();
    let err = parse_search_sheet(&rows, TimeFraction::Hundredths, &mut registry).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MalformedRow {
            problem: RowProblem::MissingColumns {
                expected: 11,
                found: 9
            },
            ..
        }
    ));
}

#[test]
fn too_few_columns_is_malformed() {
    let text = ",,,S1,,,\nlabels\n1,Anna,Rex\n";
    let rows = read_rows_from(text.as_bytes()).expect("read rows");
    let mut registry = ParticipantRegistry::new();
    let err = parse_search_sheet(&rows, TimeFraction::Hundredths, &mut registry).unwrap_err();
    assert!(matches!(err, IngestError::MalformedRow { line: 3, .. }));
}

#[test]
fn sheet_without_search_names_has_no_events() {
    let rows = read_rows_from("a,b,c\n".as_bytes()).expect("read rows");
    let mut registry = ParticipantRegistry::new();
    let err = parse_search_sheet(&rows, TimeFraction::Hundredths, &mut registry).unwrap_err();
    assert!(matches!(err, IngestError::NoEvents));
}
