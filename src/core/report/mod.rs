//! Report generation for saved rosters
//!
//! Renders the course table and the summary row as Markdown or HTML.

pub mod formats;

use crate::core::grading::GradingScale;
use crate::core::models::CourseRecord;
use crate::core::summary::Summary;
use crate::core::Roster;
use std::path::Path;
use thiserror::Error;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Errors raised while rendering or writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Template rendering failed.
    #[error("failed to render report: {0}")]
    Render(#[from] askama::Error),

    /// The report file could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// One course line of a report, with derived values resolved
#[derive(Debug, Clone)]
pub struct ReportRow {
    /// 1-based row number
    pub number: usize,
    /// Category label
    pub category: String,
    /// Requirement label
    pub requirement: String,
    /// Course name
    pub name: String,
    /// Credit hours
    pub credits: u8,
    /// Attendance score
    pub attendance: u8,
    /// Assignment score
    pub assignment: u8,
    /// Midterm score
    pub midterm: u8,
    /// Final exam score
    pub final_exam: u8,
    /// Component total
    pub total: i32,
    /// Letter grade or pass/fail mark
    pub outcome: String,
    /// Whether the letter grade is failing
    pub failing: bool,
}

impl ReportRow {
    fn from_record(number: usize, record: &CourseRecord, scale: GradingScale) -> Self {
        Self {
            number,
            category: record.category.to_string(),
            requirement: record.requirement.to_string(),
            name: record.display_name().to_string(),
            credits: record.credits,
            attendance: record.attendance,
            assignment: record.assignment,
            midterm: record.midterm,
            final_exam: record.final_exam,
            total: record.total_score(),
            outcome: record.outcome(scale).to_string(),
            failing: record.grade(scale).is_failing(),
        }
    }
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Report title, usually the roster file stem
    pub title: String,
    /// Selected school year, shown in the header only
    pub year: String,
    /// Grading scale the outcomes were computed under
    pub scale: GradingScale,
    /// Course lines in roster order
    pub rows: Vec<ReportRow>,
    /// Summary row; `None` while the summary is hidden
    pub summary: Option<Summary>,
}

impl ReportContext {
    /// Build a context from the current state of a roster
    #[must_use]
    pub fn from_roster(title: impl Into<String>, year: impl Into<String>, roster: &Roster) -> Self {
        let scale = roster.scale();
        let rows = roster
            .records()
            .enumerate()
            .map(|(i, record)| ReportRow::from_record(i + 1, record, scale))
            .collect();
        Self {
            title: title.into(),
            year: year.into(),
            scale,
            rows,
            summary: roster.visible_summary(),
        }
    }

    /// Number of failing courses
    #[must_use]
    pub fn failing_count(&self) -> usize {
        self.rows.iter().filter(|r| r.failing).count()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), ReportError> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Category, Requirement};

    fn saved_roster() -> Roster {
        let mut roster = Roster::with_records(
            vec![
                CourseRecord::new("Statistics", Category::Major, Requirement::Required, 3)
                    .with_scores(10, 10, 15, 10),
                CourseRecord::new("Algebra", Category::General, Requirement::Elective, 1)
                    .with_scores(20, 20, 20, 0),
            ],
            GradingScale::Standard,
        );
        roster.commit().unwrap();
        roster
    }

    #[test]
    fn test_context_from_saved_roster() {
        let ctx = ReportContext::from_roster("spring", "2nd year", &saved_roster());

        assert_eq!(ctx.rows.len(), 2);
        assert_eq!(ctx.rows[0].name, "Algebra");
        assert_eq!(ctx.rows[0].outcome, "P");
        assert_eq!(ctx.rows[1].outcome, "F");
        assert_eq!(ctx.failing_count(), 1);
        assert!(ctx.summary.is_some());
    }

    #[test]
    fn test_context_hides_summary_before_save() {
        let mut roster = Roster::default();
        roster.add_record();
        let ctx = ReportContext::from_roster("draft", "1st year", &roster);

        assert_eq!(ctx.rows[0].name, "(unnamed)");
        assert!(ctx.summary.is_none());
    }
}
