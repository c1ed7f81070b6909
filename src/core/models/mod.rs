//! Data models for `gradesheet`

pub mod course;

pub use course::{Category, CourseRecord, Field, Outcome, Requirement, UNNAMED};
