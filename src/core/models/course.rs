//! Course record model

use crate::core::grading::{Grade, GradingScale, PassFail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used for courses that have no name yet
pub const UNNAMED: &str = "(unnamed)";

/// Course category (informational, never scored)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// General education
    #[default]
    #[serde(alias = "general", alias = "교양")]
    General,
    /// Major course
    #[serde(alias = "major", alias = "전공")]
    Major,
}

/// Requirement type (informational, never scored)
///
/// Declaration order is the sort order used on save.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Requirement {
    /// Elective course
    #[default]
    #[serde(alias = "elective", alias = "선택")]
    Elective,
    /// Required course
    #[serde(alias = "required", alias = "필수")]
    Required,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "General"),
            Self::Major => write!(f, "Major"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" | "교양" => Ok(Self::General),
            "major" | "전공" => Ok(Self::Major),
            _ => Err(format!("Unknown category: '{s}' (expected General or Major)")),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elective => write!(f, "Elective"),
            Self::Required => write!(f, "Required"),
        }
    }
}

impl FromStr for Requirement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "elective" | "선택" => Ok(Self::Elective),
            "required" | "필수" => Ok(Self::Required),
            _ => Err(format!(
                "Unknown requirement: '{s}' (expected Required or Elective)"
            )),
        }
    }
}

/// Editable field of a course record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Course category
    Category,
    /// Requirement type
    Requirement,
    /// Course name
    Name,
    /// Credit hours, 1 to 3
    Credits,
    /// Attendance score, 0 to 20
    Attendance,
    /// Assignment score, 0 to 20
    Assignment,
    /// Midterm exam score, 0 to 30
    Midterm,
    /// Final exam score, 0 to 30
    Final,
}

impl Field {
    /// Range-checked fields, in column order
    pub const NUMERIC: [Self; 5] = [
        Self::Credits,
        Self::Attendance,
        Self::Assignment,
        Self::Midterm,
        Self::Final,
    ];

    /// Numeric fields with their closed `(min, max)` range; `None` for text fields
    #[must_use]
    pub const fn bounds(self) -> Option<(u8, u8)> {
        match self {
            Self::Credits => Some((1, 3)),
            Self::Attendance | Self::Assignment => Some((0, 20)),
            Self::Midterm | Self::Final => Some((0, 30)),
            Self::Category | Self::Requirement | Self::Name => None,
        }
    }

    /// Whether the field holds an integer
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.bounds().is_some()
    }

    /// Value a numeric field falls back to when blur validation fails
    #[must_use]
    pub const fn reset_value(self) -> u8 {
        match self {
            Self::Credits => 1,
            _ => 0,
        }
    }

    /// Lowercase field name as typed on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Requirement => "requirement",
            Self::Name => "name",
            Self::Credits => "credits",
            Self::Attendance => "attendance",
            Self::Assignment => "assignment",
            Self::Midterm => "midterm",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "requirement" | "type" => Ok(Self::Requirement),
            "name" => Ok(Self::Name),
            "credits" => Ok(Self::Credits),
            "attendance" => Ok(Self::Attendance),
            "assignment" => Ok(Self::Assignment),
            "midterm" => Ok(Self::Midterm),
            "final" => Ok(Self::Final),
            _ => Err(format!("Unknown field: '{s}'")),
        }
    }
}

/// What a course shows in its grade column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Letter grade for multi-credit courses
    Letter(Grade),
    /// Pass/fail mark for 1-credit courses
    PassFail(PassFail),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(grade) => write!(f, "{grade}"),
            Self::PassFail(mark) => write!(f, "{mark}"),
        }
    }
}

/// One row of the grade sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// General or major course
    pub category: Category,

    /// Required or elective course
    pub requirement: Requirement,

    /// Course name (e.g., "Linear Algebra")
    pub name: String,

    /// Credit hours; 1 marks a pass/fail course
    pub credits: u8,

    /// Attendance score
    pub attendance: u8,

    /// Assignment score
    pub assignment: u8,

    /// Midterm exam score
    pub midterm: u8,

    /// Final exam score
    #[serde(rename = "final")]
    pub final_exam: u8,
}

impl Default for CourseRecord {
    fn default() -> Self {
        Self {
            category: Category::General,
            requirement: Requirement::Elective,
            name: String::new(),
            credits: 1,
            attendance: 0,
            assignment: 0,
            midterm: 0,
            final_exam: 0,
        }
    }
}

impl CourseRecord {
    /// Create a named course with default scores
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: Category,
        requirement: Requirement,
        credits: u8,
    ) -> Self {
        Self {
            category,
            requirement,
            name: name.into(),
            credits,
            ..Self::default()
        }
    }

    /// Builder-style helper setting all four score components
    #[must_use]
    pub fn with_scores(
        mut self,
        attendance: u8,
        assignment: u8,
        midterm: u8,
        final_exam: u8,
    ) -> Self {
        self.attendance = attendance;
        self.assignment = assignment;
        self.midterm = midterm;
        self.final_exam = final_exam;
        self
    }

    /// Sum of the four score components
    #[must_use]
    pub fn total_score(&self) -> i32 {
        i32::from(self.attendance)
            + i32::from(self.assignment)
            + i32::from(self.midterm)
            + i32::from(self.final_exam)
    }

    /// Letter grade of the total under `scale`
    #[must_use]
    pub fn grade(&self, scale: GradingScale) -> Grade {
        scale.grade(self.total_score())
    }

    /// Whether the course is graded pass/fail
    #[must_use]
    pub const fn is_pass_fail(&self) -> bool {
        self.credits == 1
    }

    /// Pass/fail mark, only for 1-credit courses
    #[must_use]
    pub fn pass_fail(&self) -> Option<PassFail> {
        self.is_pass_fail()
            .then(|| PassFail::from_total(self.total_score()))
    }

    /// Grade column value: pass/fail for 1-credit courses, letter grade otherwise
    #[must_use]
    pub fn outcome(&self, scale: GradingScale) -> Outcome {
        self.pass_fail()
            .map_or_else(|| Outcome::Letter(self.grade(scale)), Outcome::PassFail)
    }

    /// Name for notices, substituting [`UNNAMED`] when blank
    #[must_use]
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            UNNAMED
        } else {
            trimmed
        }
    }

    /// Current integer value of a numeric field
    #[must_use]
    pub const fn numeric(&self, field: Field) -> Option<u8> {
        match field {
            Field::Credits => Some(self.credits),
            Field::Attendance => Some(self.attendance),
            Field::Assignment => Some(self.assignment),
            Field::Midterm => Some(self.midterm),
            Field::Final => Some(self.final_exam),
            Field::Category | Field::Requirement | Field::Name => None,
        }
    }

    /// Store a value into a numeric field; text fields are ignored
    pub fn set_numeric(&mut self, field: Field, value: u8) {
        match field {
            Field::Credits => self.credits = value,
            Field::Attendance => self.attendance = value,
            Field::Assignment => self.assignment = value,
            Field::Midterm => self.midterm = value,
            Field::Final => self.final_exam = value,
            Field::Category | Field::Requirement | Field::Name => {}
        }
    }
}
