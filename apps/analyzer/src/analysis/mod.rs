// Pipeline orchestration: extract → tag → check sections.
// Runs synchronously; handlers move it onto the blocking pool.

pub mod handlers;

use serde::Serialize;
use tracing::info;

use crate::extraction::{extract_text, ExtractionError, UploadedDocument};
use crate::report::Report;
use crate::sections::{check_sections, CompletenessReport, Section, SectionCheck};
use crate::skills::{extract_skills, PosTagger, SkillSet};

/// Everything computed for one upload with text.
#[derive(Debug, Clone)]
pub struct ResumeAnalysis {
    pub skills: SkillSet,
    pub completeness: CompletenessReport,
}

impl ResumeAnalysis {
    pub fn missing_sections(&self) -> &[Section] {
        &self.completeness.missing_sections
    }

    pub fn report(&self) -> Report {
        Report::summary(&self.skills, self.missing_sections())
    }
}

/// JSON shape of an analysis as shown to the user.
#[derive(Debug, Serialize)]
pub struct AnalysisView {
    pub skills: SkillSet,
    pub missing_sections: Vec<Section>,
    /// `"None"` when nothing is missing, otherwise names joined with ", ".
    pub missing_sections_display: String,
    pub sections: Vec<SectionCheck>,
}

impl From<ResumeAnalysis> for AnalysisView {
    fn from(analysis: ResumeAnalysis) -> Self {
        let missing_sections_display = analysis.completeness.missing_display();
        AnalysisView {
            skills: analysis.skills,
            missing_sections: analysis.completeness.missing_sections,
            missing_sections_display,
            sections: analysis.completeness.sections,
        }
    }
}

/// Runs both analyzers over already extracted text.
pub fn analyze_text(text: &str, tagger: &dyn PosTagger) -> ResumeAnalysis {
    ResumeAnalysis {
        skills: extract_skills(tagger, text),
        completeness: check_sections(text),
    }
}

/// Full pipeline for one upload.
///
/// `Ok(None)` when the format is unsupported or no text came out of the
/// document: nothing downstream runs in that case.
pub fn analyze_document(
    document: &UploadedDocument,
    tagger: &dyn PosTagger,
) -> Result<Option<ResumeAnalysis>, ExtractionError> {
    let text = match extract_text(document)? {
        Some(text) if !text.is_empty() => text,
        Some(_) => {
            info!(file_name = %document.file_name, "No text extracted, skipping analysis");
            return Ok(None);
        }
        None => {
            info!(file_name = %document.file_name, "Unsupported format, skipping analysis");
            return Ok(None);
        }
    };

    let analysis = analyze_text(&text, tagger);
    info!(
        file_name = %document.file_name,
        chars = text.len(),
        skills = analysis.skills.len(),
        missing = %analysis.completeness.missing_display(),
        "Resume analyzed"
    );
    Ok(Some(analysis))
}
