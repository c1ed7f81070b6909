//! Integration tests for loading roster CSV files

use gradesheet::core::loader::{parse_roster_csv, LoadError};
use gradesheet::core::models::{Category, Field, Requirement};
use gradesheet::core::{GradingScale, Roster, RosterError};

#[test]
fn test_load_sample_roster() {
    let records = parse_roster_csv("samples/rosters/spring.csv").expect("Failed to load roster");

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].name, "Data Structures");
    assert_eq!(records[0].category, Category::Major);
    assert_eq!(records[0].total_score(), 87);
    assert_eq!(records[1].credits, 1);
    assert!(records[1].is_pass_fail());
}

#[test]
fn test_loaded_roster_commits_in_sorted_order() {
    let records = parse_roster_csv("samples/rosters/spring.csv").unwrap();
    let mut roster = Roster::with_records(records, GradingScale::Standard);

    roster.commit().expect("sample roster should save");

    let order: Vec<(Category, Requirement, &str)> = roster
        .records()
        .map(|r| (r.category, r.requirement, r.name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (Category::General, Requirement::Elective, "Algebra"),
            (Category::General, Requirement::Required, "Writing"),
            (Category::Major, Requirement::Elective, "Compilers"),
            (Category::Major, Requirement::Required, "Data Structures"),
            (Category::Major, Requirement::Required, "Operating Systems"),
        ]
    );

    let summary = roster.visible_summary().unwrap();
    assert_eq!(summary.count, 5);
    assert_eq!(summary.credits, 12);
    assert_eq!(summary.total_score, 87 + 60 + 65 + 83 + 40);
    assert_eq!(summary.average_label(), "67.00");
}

#[test]
fn test_load_korean_labels() {
    let records = parse_roster_csv("samples/rosters/korean.csv").unwrap();

    assert_eq!(records[0].category, Category::Major);
    assert_eq!(records[0].requirement, Requirement::Required);
    assert_eq!(records[1].category, Category::General);
    assert_eq!(records[1].requirement, Requirement::Elective);
}

#[test]
fn test_duplicate_names_load_but_do_not_save() {
    let records = parse_roster_csv("samples/rosters/duplicates.csv").unwrap();
    let mut roster = Roster::with_records(records, GradingScale::Standard);

    assert_eq!(
        roster.commit(),
        Err(RosterError::DuplicateName { name: "Y".to_string() })
    );
}

#[test]
fn test_out_of_range_score_is_rejected() {
    let err = parse_roster_csv("samples/rosters/out_of_range.csv").unwrap_err();

    match err {
        LoadError::OutOfRange {
            row,
            field,
            value,
            max,
            ..
        } => {
            assert_eq!(row, 2);
            assert_eq!(field, Field::Midterm);
            assert_eq!(value, 35);
            assert_eq!(max, 30);
        }
        other => panic!("Expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn test_unknown_category_is_parse_error() {
    let err = parse_roster_csv("samples/rosters/malformed.csv").unwrap_err();
    assert!(matches!(err, LoadError::Parse { row: 2, .. }), "{err}");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = parse_roster_csv("samples/rosters/nonexistent.csv").unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
