//! Report Renderer — summary pairs rendered to an in-memory PDF.

pub mod font_metrics;
pub mod render;

use serde::Serialize;

use crate::sections::{display_missing, Section};
use crate::skills::SkillSet;

pub use render::{render_pdf, ReportError};

pub const REPORT_TITLE: &str = "AI Resume Analyzer Report";
pub const REPORT_FILE_NAME: &str = "resume_analysis.pdf";
pub const REPORT_MIME_TYPE: &str = "application/pdf";

pub const SKILLS_LABEL: &str = "Extracted Skills";
pub const MISSING_SECTIONS_LABEL: &str = "Missing Sections";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: String,
}

/// Ordered `label: value` lines under the fixed title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(ReportEntry {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The two-line analysis summary offered for download.
    pub fn summary(skills: &SkillSet, missing: &[Section]) -> Self {
        Report::new()
            .with_entry(SKILLS_LABEL, skills.joined())
            .with_entry(MISSING_SECTIONS_LABEL, display_missing(missing))
    }
}
