//! Letter grades and the threshold tables that produce them

use std::fmt;
use std::str::FromStr;

/// Minimum total score for a passing mark on a pass/fail course
pub const PASS_THRESHOLD: i32 = 60;

/// Letter grade, ordered by rank (`F` lowest, `A+` highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// Failing grade
    F,
    /// D zero
    D0,
    /// D plus
    DPlus,
    /// C zero
    C0,
    /// C plus
    CPlus,
    /// B zero
    B0,
    /// B plus
    BPlus,
    /// A zero
    A0,
    /// A plus
    APlus,
}

impl Grade {
    /// Position of the grade in the rank ordering, `F` = 0 through `A+` = 8
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this is the failing grade
    #[must_use]
    pub const fn is_failing(self) -> bool {
        matches!(self, Self::F)
    }

    /// Display label (e.g. "A+", "B0")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A0 => "A0",
            Self::BPlus => "B+",
            Self::B0 => "B0",
            Self::CPlus => "C+",
            Self::C0 => "C0",
            Self::DPlus => "D+",
            Self::D0 => "D0",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pass/fail mark for 1-credit courses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassFail {
    /// Total score at or above [`PASS_THRESHOLD`]
    Pass,
    /// Total score below [`PASS_THRESHOLD`]
    NoPass,
}

impl PassFail {
    /// Mark a total score against [`PASS_THRESHOLD`]
    #[must_use]
    pub const fn from_total(total: i32) -> Self {
        if total >= PASS_THRESHOLD {
            Self::Pass
        } else {
            Self::NoPass
        }
    }
}

impl fmt::Display for PassFail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("P"),
            Self::NoPass => f.write_str("NP"),
        }
    }
}

/// Threshold table used to turn totals into letter grades
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradingScale {
    /// Nine buckets, A+ through F in five-point steps
    #[default]
    Standard,
    /// Coarse four-bucket table from the first revision of the grade sheet
    Legacy,
}

/// Canonical thresholds, checked high to low
const STANDARD_TABLE: [(i32, Grade); 8] = [
    (95, Grade::APlus),
    (90, Grade::A0),
    (85, Grade::BPlus),
    (80, Grade::B0),
    (75, Grade::CPlus),
    (70, Grade::C0),
    (65, Grade::DPlus),
    (60, Grade::D0),
];

const LEGACY_TABLE: [(i32, Grade); 4] = [
    (90, Grade::A0),
    (80, Grade::B0),
    (70, Grade::C0),
    (60, Grade::DPlus),
];

impl GradingScale {
    /// Grade a total score under this scale
    #[must_use]
    pub fn grade(self, total: i32) -> Grade {
        let table: &[(i32, Grade)] = match self {
            Self::Standard => &STANDARD_TABLE,
            Self::Legacy => &LEGACY_TABLE,
        };
        table
            .iter()
            .find(|(min, _)| total >= *min)
            .map_or(Grade::F, |(_, grade)| *grade)
    }
}

impl FromStr for GradingScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "" => Ok(Self::Standard),
            "legacy" => Ok(Self::Legacy),
            _ => Err(format!("Unknown grading scale: '{s}' (expected standard or legacy)")),
        }
    }
}

impl fmt::Display for GradingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// Grade a total score under the standard scale
#[must_use]
pub fn grade_of(total: i32) -> Grade {
    GradingScale::Standard.grade(total)
}
