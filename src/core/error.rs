//! Roster engine error types.
//!
//! Every variant is recoverable: the roster is left valid and editable, and
//! the `Display` text is the notice shown to the user.

use crate::core::models::Field;
use thiserror::Error;

/// Errors raised by roster operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// An operation referenced a row that does not exist.
    #[error("no course at row {} (the roster has {len})", .index + 1)]
    Index {
        /// 0-based row that was requested
        index: usize,
        /// Number of rows in the roster
        len: usize,
    },

    /// A blurred numeric field was not an integer in range; it has been reset.
    #[error("{field} must be a whole number between {min} and {max}; reset to {reset_to}")]
    FieldValidation {
        /// Field whose input was rejected
        field: Field,
        /// Lowest accepted value
        min: u8,
        /// Highest accepted value
        max: u8,
        /// Value the field now holds
        reset_to: u8,
    },

    /// A course has a blank name.
    #[error("course names cannot be blank")]
    EmptyName,

    /// A committed numeric field lies outside its range.
    #[error("{field} of '{name}' must be between {min} and {max} (it is {value})")]
    FieldRange {
        /// Course name as entered
        name: String,
        /// Offending field
        field: Field,
        /// Value held by the field
        value: u8,
        /// Lowest accepted value
        min: u8,
        /// Highest accepted value
        max: u8,
    },

    /// A course total fell outside 0..=100.
    #[error("course totals must be between 0 and 100 ('{name}' has {total})")]
    ScoreRange {
        /// Course name as entered
        name: String,
        /// Sum of the four score components
        total: i32,
    },

    /// Two non-failing courses share a name.
    #[error("a course named '{name}' already exists; check the roster again")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// Delete was requested with nothing selected.
    #[error("select the courses to delete first")]
    EmptySelection,
}

impl RosterError {
    /// Returns `true` for the errors raised by [`commit`](crate::core::Roster::commit).
    #[must_use]
    pub const fn is_commit_rejection(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::FieldRange { .. }
                | Self::ScoreRange { .. }
                | Self::DuplicateName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_message_is_one_based() {
        let err = RosterError::Index { index: 4, len: 3 };
        assert_eq!(err.to_string(), "no course at row 5 (the roster has 3)");
    }

    #[test]
    fn test_field_message_names_range() {
        let err = RosterError::FieldValidation {
            field: Field::Midterm,
            min: 0,
            max: 30,
            reset_to: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("midterm"));
        assert!(msg.contains("between 0 and 30"));
    }

    #[test]
    fn test_commit_rejections() {
        assert!(RosterError::EmptyName.is_commit_rejection());
        assert!(RosterError::DuplicateName { name: "X".into() }.is_commit_rejection());
        assert!(!RosterError::EmptySelection.is_commit_rejection());
    }

    #[test]
    fn test_field_range_message() {
        let err = RosterError::FieldRange {
            name: "Lab".into(),
            field: Field::Credits,
            value: 0,
            min: 1,
            max: 3,
        };
        assert_eq!(err.to_string(), "credits of 'Lab' must be between 1 and 3 (it is 0)");
        assert!(err.is_commit_rejection());
    }
}
