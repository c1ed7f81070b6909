//! HTML report generator
//!
//! Generates a self-contained page with embedded CSS. Failing rows are
//! highlighted; the summary row is left blank while the summary is hidden.

use crate::core::report::{ReportContext, ReportError, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate<'a> {
    ctx: &'a ReportContext,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        Ok(HtmlTemplate { ctx }.render()?)
    }
}
