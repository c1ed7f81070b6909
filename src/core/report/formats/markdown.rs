//! Markdown report generator
//!
//! Generates a GitHub-flavoured table that renders in GitHub, GitLab and VS Code.

use crate::core::report::{ReportContext, ReportError, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "report.md", escape = "none")]
struct MarkdownTemplate<'a> {
    ctx: &'a ReportContext,
}

mod filters {
    /// Escape characters that would break a table cell
    #[allow(clippy::unnecessary_wraps)]
    pub fn cell<T: std::fmt::Display>(value: T) -> askama::Result<String> {
        Ok(value.to_string().replace('|', "\\|"))
    }
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        Ok(MarkdownTemplate { ctx }.render()?)
    }
}
