//! CLI command handlers for `gradesheet`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod grade;
pub mod report;
pub mod session;
