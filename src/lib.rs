//! Library for `gradesheet`
//! Contains the roster engine and the configuration shared with the CLI

pub mod core;

pub use crate::core::get_version;
