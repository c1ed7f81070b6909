//! End-to-end roster scenarios through the public engine API

use gradesheet::core::models::{Category, CourseRecord, Field, Outcome, Requirement};
use gradesheet::core::roster::Edit;
use gradesheet::core::{compute_summary, grade_of, Grade, GradingScale, PassFail, Roster, RosterError};
use std::collections::BTreeSet;

fn course(name: &str, credits: u8, scores: (u8, u8, u8, u8)) -> CourseRecord {
    CourseRecord::new(name, Category::General, Requirement::Elective, credits)
        .with_scores(scores.0, scores.1, scores.2, scores.3)
}

fn names(roster: &Roster) -> Vec<String> {
    roster.records().map(|r| r.name.clone()).collect()
}

#[test]
fn test_one_credit_course_passes_and_summarises() {
    let mut roster = Roster::new(GradingScale::Standard);
    roster.add_record();
    roster.update_field(0, Edit::Name("Algebra".to_string())).unwrap();
    for (field, value) in [
        (Field::Attendance, "20"),
        (Field::Assignment, "20"),
        (Field::Midterm, "20"),
        (Field::Final, "0"),
    ] {
        roster.update_field(0, Edit::Numeric(field, value.to_string())).unwrap();
        roster.validate_field(0, field).unwrap();
    }

    let record = roster.record(0).unwrap();
    assert_eq!(record.total_score(), 60);
    assert_eq!(record.outcome(roster.scale()), Outcome::PassFail(PassFail::Pass));

    roster.commit().unwrap();
    let summary = roster.visible_summary().expect("summary shown after save");
    assert_eq!(summary.average_label(), "60.00");
}

#[test]
fn test_failing_duplicates_are_exempt() {
    let mut roster = Roster::with_records(
        vec![course("X", 3, (10, 10, 15, 15)), course("X", 3, (10, 10, 15, 15))],
        GradingScale::Standard,
    );
    assert_eq!(roster.record(0).unwrap().grade(GradingScale::Standard), Grade::F);
    assert!(roster.commit().is_ok());
    assert_eq!(roster.len(), 2);
}

#[test]
fn test_passing_duplicates_are_rejected_without_reordering() {
    let records = vec![
        course("Y", 3, (20, 20, 15, 15)),
        course("B", 3, (20, 20, 20, 20)),
        course("Y", 3, (20, 20, 15, 15)),
    ];
    let mut roster = Roster::with_records(records.clone(), GradingScale::Standard);
    assert_eq!(grade_of(70), Grade::C0);

    let err = roster.commit().unwrap_err();
    assert_eq!(err, RosterError::DuplicateName { name: "Y".to_string() });
    assert_eq!(roster.to_records(), records);
    assert!(!roster.summary_visible());
}

#[test]
fn test_midterm_blur_resets_out_of_range_input() {
    let mut roster = Roster::new(GradingScale::Standard);
    roster.add_record();
    roster
        .update_field(0, Edit::Numeric(Field::Midterm, "35".to_string()))
        .unwrap();

    let err = roster.validate_field(0, Field::Midterm).unwrap_err();
    assert_eq!(
        err,
        RosterError::FieldValidation {
            field: Field::Midterm,
            min: 0,
            max: 30,
            reset_to: 0
        }
    );
    assert!(err.to_string().contains("between 0 and 30"));
    assert_eq!(roster.record(0).unwrap().midterm, 0);
}

#[test]
fn test_delete_keeps_middle_row() {
    let mut roster = Roster::with_records(
        vec![
            course("First", 3, (0, 0, 0, 0)),
            course("Second", 3, (0, 0, 0, 0)),
            course("Third", 3, (0, 0, 0, 0)),
        ],
        GradingScale::Standard,
    );

    let notice = roster.remove_records(&BTreeSet::from([0, 2])).unwrap();
    assert_eq!(notice.to_string(), "✓ Deleted: First, Third");
    assert_eq!(names(&roster), vec!["Second"]);
    assert!(roster.summary_visible());
}

#[test]
fn test_commit_is_idempotent() {
    let mut roster = Roster::with_records(
        vec![
            CourseRecord::new("Zoology", Category::Major, Requirement::Required, 3),
            CourseRecord::new("Art", Category::General, Requirement::Required, 2),
            CourseRecord::new("Music", Category::General, Requirement::Elective, 2),
        ],
        GradingScale::Standard,
    );

    roster.commit().unwrap();
    let first = roster.to_records();
    roster.commit().unwrap();

    assert_eq!(roster.to_records(), first);
    assert_eq!(names(&roster), vec!["Music", "Art", "Zoology"]);
}

#[test]
fn test_empty_roster_summary_is_blank() {
    let mut roster = Roster::new(GradingScale::Standard);
    roster.commit().unwrap();

    let summary = roster.visible_summary().unwrap();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.average, None);
    assert_eq!(summary.average_label(), "");
    assert_eq!(summary.overall_grade_label(), "");
}

#[test]
fn test_summary_total_matches_row_totals() {
    let records = vec![
        course("A", 3, (20, 20, 30, 30)),
        course("B", 2, (5, 0, 12, 3)),
        course("C", 1, (18, 17, 0, 29)),
    ];
    let expected: i64 = records.iter().map(|r| i64::from(r.total_score())).sum();
    assert_eq!(compute_summary(&records).total_score, expected);
}

#[test]
fn test_selection_survives_sort_and_deletes_the_same_course() {
    let mut roster = Roster::with_records(
        vec![
            CourseRecord::new("Physics", Category::Major, Requirement::Required, 3),
            CourseRecord::new("Writing", Category::General, Requirement::Elective, 2),
        ],
        GradingScale::Standard,
    );
    roster.toggle_selection(0).unwrap();
    roster.commit().unwrap();

    assert_eq!(roster.selected_indices(), BTreeSet::from([1]));
    let notice = roster.remove_selected().unwrap();
    assert_eq!(notice.to_string(), "✓ Deleted: Physics");
    assert_eq!(names(&roster), vec!["Writing"]);
}

#[test]
fn test_adding_a_row_hides_the_summary() {
    let mut roster = Roster::new(GradingScale::Standard);
    roster.commit().unwrap();
    assert!(roster.summary_visible());

    roster.add_record();
    assert!(roster.visible_summary().is_none());
}

#[test]
fn test_out_of_range_fields_cannot_be_saved() {
    let record = CourseRecord {
        credits: 0,
        midterm: 35,
        ..CourseRecord::new("Lab", Category::Major, Requirement::Required, 3)
    };
    let mut roster = Roster::with_records(vec![record.clone()], GradingScale::Standard);

    let err = roster.commit().unwrap_err();

    assert!(matches!(err, RosterError::FieldRange { field: Field::Credits, .. }));
    assert_eq!(roster.to_records(), vec![record]);
    assert!(roster.visible_summary().is_none());
}
