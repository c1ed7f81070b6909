//! CLI integration tests using assert_cmd.
//!
//! Every command runs with its config directory pointed at a scratch
//! directory so the user's real configuration is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gradesheet(config_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradesheet").unwrap();
    cmd.env("GRADESHEET_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_is_not_empty() {
    assert!(!gradesheet::get_version().trim().is_empty());
}

#[test]
fn grade_prints_letter_and_pass_mark() {
    let dir = TempDir::new().unwrap();
    gradesheet(&dir)
        .args(["grade", "88"])
        .assert()
        .success()
        .stdout(predicate::str::contains("88 → B+"))
        .stdout(predicate::str::contains("1-credit: P"));
}

#[test]
fn grade_uses_legacy_scale_override() {
    let dir = TempDir::new().unwrap();
    gradesheet(&dir)
        .args(["--scale", "legacy", "grade", "65"])
        .assert()
        .success()
        .stdout(predicate::str::contains("65 → D+ (legacy scale"));
}

#[test]
fn report_writes_markdown() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("spring.md");

    gradesheet(&dir)
        .args(["report", "samples/rosters/spring.csv", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Report generated"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("# Grade report: spring"));
    assert!(content.contains("| 1 | General | Elective | Algebra | 1 | 20 | 20 | 20 | 0 | 60 | P |"));
    assert!(content.contains("| **Total** |"));
    assert!(content.contains("67.00"));
}

#[test]
fn report_defaults_to_reports_dir() {
    let dir = TempDir::new().unwrap();
    let reports = dir.path().join("reports");

    gradesheet(&dir)
        .args(["--reports-dir"])
        .arg(&reports)
        .args(["report", "samples/rosters/spring.csv", "--format", "html"])
        .assert()
        .success();

    let content = fs::read_to_string(reports.join("spring_report.html")).unwrap();
    assert!(content.contains("Operating Systems"));
    assert!(content.contains("class=\"failing\""));
}

#[test]
fn report_rejects_duplicate_names() {
    let dir = TempDir::new().unwrap();
    gradesheet(&dir)
        .args(["report", "samples/rosters/duplicates.csv", "-o"])
        .arg(dir.path().join("dup.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("a course named 'Y' already exists"));

    assert!(!dir.path().join("dup.md").exists());
}

#[test]
fn report_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    gradesheet(&dir)
        .args(["report", "samples/rosters/spring.csv", "-f", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report format"));
}

#[test]
fn session_from_stdin() {
    let dir = TempDir::new().unwrap();
    gradesheet(&dir)
        .arg("session")
        .write_stdin(
            "add\n\
             set 1 name Algebra\n\
             set 1 attendance 20\n\
             set 1 assignment 20\n\
             set 1 midterm 20\n\
             save\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added row 1"))
        .stdout(predicate::str::contains("✓ Saved: Algebra"));
}

#[test]
fn session_save_reports_blur_reset() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("edit.txt");
    fs::write(&script, "add\nset 1 name Lab\nset 1 midterm 35\nsave\nshow\n").unwrap();

    gradesheet(&dir)
        .args(["session", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("midterm must be a whole number between 0 and 30"))
        .stdout(predicate::str::contains("✓ Saved: Lab"));
}

#[test]
fn session_loads_roster() {
    let dir = TempDir::new().unwrap();
    gradesheet(&dir)
        .args(["--year", "2nd year", "session", "--load", "samples/rosters/spring.csv"])
        .write_stdin("select 1\ndelete\nsummary\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade sheet (2nd year)"))
        .stdout(predicate::str::contains("✓ Deleted: Data Structures"))
        .stdout(predicate::str::contains("4 courses"));
}

#[test]
fn config_set_persists_and_overrides_do_not() {
    let dir = TempDir::new().unwrap();

    gradesheet(&dir)
        .args(["config", "set", "year", "3rd year"])
        .assert()
        .success();

    gradesheet(&dir)
        .args(["--year", "4th year", "config", "set", "scale", "legacy"])
        .assert()
        .success();

    gradesheet(&dir)
        .args(["config", "get", "year"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3rd year"));

    gradesheet(&dir)
        .args(["config", "get", "scale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("legacy"));
}

#[test]
fn config_set_rejects_unknown_scale() {
    let dir = TempDir::new().unwrap();
    gradesheet(&dir)
        .args(["config", "set", "scale", "curve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown grading scale"));
}
