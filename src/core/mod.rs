//! Core module: grading, roster validation and aggregation

pub mod config;
pub mod error;
pub mod grading;
pub mod loader;
pub mod models;
pub mod notice;
pub mod report;
pub mod roster;
pub mod summary;

pub use error::RosterError;
pub use grading::{grade_of, Grade, GradingScale, PassFail};
pub use roster::Roster;
pub use summary::{compute_summary, Summary};

/// Returns the current version of the `gradesheet` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
