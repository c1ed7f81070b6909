//! Aggregate statistics over a roster

use crate::core::grading::{Grade, GradingScale};
use crate::core::models::CourseRecord;

/// Column sums, average and overall grade of a roster
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of courses summarised
    pub count: usize,
    /// Sum of credit hours
    pub credits: u32,
    /// Sum of attendance scores
    pub attendance: u32,
    /// Sum of assignment scores
    pub assignment: u32,
    /// Sum of midterm scores
    pub midterm: u32,
    /// Sum of final exam scores
    pub final_exam: u32,
    /// Sum of per-course totals
    pub total_score: i64,
    /// Mean of per-course totals; `None` for an empty roster
    pub average: Option<f64>,
    /// Grade of the rounded average, for display only
    pub overall_grade: Option<Grade>,
}

impl Summary {
    /// Average formatted to two decimals, or an empty string when undefined
    #[must_use]
    pub fn average_label(&self) -> String {
        self.average.map_or_else(String::new, |avg| format!("{avg:.2}"))
    }

    /// Overall grade label, or an empty string when undefined
    #[must_use]
    pub fn overall_grade_label(&self) -> String {
        self.overall_grade
            .map_or_else(String::new, |grade| grade.to_string())
    }
}

/// Sum every numeric column and average the totals under the standard scale
#[must_use]
pub fn compute_summary(records: &[CourseRecord]) -> Summary {
    compute_summary_with(records, GradingScale::Standard)
}

/// Same as [`compute_summary`] with an explicit grading scale for the overall grade
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn compute_summary_with(records: &[CourseRecord], scale: GradingScale) -> Summary {
    let column = |pick: fn(&CourseRecord) -> u8| -> u32 {
        records.iter().map(|r| u32::from(pick(r))).sum()
    };

    let total_score: i64 = records.iter().map(|r| i64::from(r.total_score())).sum();
    let count = records.len();

    let average = (count > 0).then(|| total_score as f64 / count as f64);
    let overall_grade = average.map(|avg| scale.grade(avg.round() as i32));

    Summary {
        count,
        credits: column(|r| r.credits),
        attendance: column(|r| r.attendance),
        assignment: column(|r| r.assignment),
        midterm: column(|r| r.midterm),
        final_exam: column(|r| r.final_exam),
        total_score,
        average,
        overall_grade,
    }
}
