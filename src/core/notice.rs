//! User-facing messages produced by roster actions

use crate::core::error::RosterError;
use std::fmt;

/// Message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A blank course row was appended
    Added {
        /// 0-based position of the new row
        index: usize,
    },
    /// Courses were deleted
    Deleted {
        /// Display names of the deleted courses, in roster order
        names: Vec<String>,
    },
    /// The roster passed validation and was sorted
    Saved {
        /// Display names of the saved courses, in pre-sort order
        names: Vec<String>,
    },
    /// An action was rejected or corrected
    Rejected(RosterError),
}

impl Notice {
    /// Whether the notice reports a failure
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl From<RosterError> for Notice {
    fn from(err: RosterError) -> Self {
        Self::Rejected(err)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { index } => write!(f, "✓ Added row {}", index + 1),
            Self::Deleted { names } => write!(f, "✓ Deleted: {}", names.join(", ")),
            Self::Saved { names } if names.is_empty() => write!(f, "✓ Saved an empty roster"),
            Self::Saved { names } => write!(f, "✓ Saved: {}", names.join(", ")),
            Self::Rejected(err) => write!(f, "✗ {err}"),
        }
    }
}
