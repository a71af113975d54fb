//! Section Completeness Checker.
//!
//! A section counts as present when any of its keywords occurs as a
//! case-insensitive substring anywhere in the text. Substring, not word
//! boundary: "training" inside "entrainment" is a hit.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Education,
    Experience,
    Skills,
    Certifications,
    Projects,
}

/// Sections in declaration order with their matching keywords (lowercase).
pub const SECTION_KEYWORDS: &[(Section, &[&str])] = &[
    (
        Section::Education,
        &["education", "degree", "bachelor", "master", "university"],
    ),
    (
        Section::Experience,
        &["experience", "internship", "company", "work"],
    ),
    (Section::Skills, &["skills", "technologies", "expertise"]),
    (
        Section::Certifications,
        &["certification", "course", "training"],
    ),
    (Section::Projects, &["projects", "portfolio", "github"]),
];

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Certifications => "Certifications",
            Section::Projects => "Projects",
        }
    }

    #[cfg(test)]
    pub fn keywords(&self) -> &'static [&'static str] {
        SECTION_KEYWORDS
            .iter()
            .find(|(section, _)| section == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Present,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionCheck {
    pub section: Section,
    pub status: SectionStatus,
    /// Keywords found in the text, in table order.
    pub matched_keywords: Vec<String>,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletenessReport {
    pub sections: Vec<SectionCheck>,
    pub missing_sections: Vec<Section>,
}

impl CompletenessReport {
    /// Missing section names joined with ", ", or the literal `None`.
    pub fn missing_display(&self) -> String {
        display_missing(&self.missing_sections)
    }
}

pub fn display_missing(missing: &[Section]) -> String {
    if missing.is_empty() {
        return "None".to_string();
    }
    missing
        .iter()
        .map(Section::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn check_sections(text: &str) -> CompletenessReport {
    let text_lower = text.to_lowercase();
    let mut sections = Vec::with_capacity(SECTION_KEYWORDS.len());
    let mut missing_sections = Vec::new();

    for (section, keywords) in SECTION_KEYWORDS {
        let matched_keywords: Vec<String> = keywords
            .iter()
            .filter(|keyword| text_lower.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect();

        if matched_keywords.is_empty() {
            missing_sections.push(*section);
            sections.push(SectionCheck {
                section: *section,
                status: SectionStatus::Missing,
                matched_keywords,
                recommendation: Some(format!(
                    "Add a {} section (e.g. a heading mentioning \"{}\")",
                    section,
                    keywords[0]
                )),
            });
            continue;
        }

        sections.push(SectionCheck {
            section: *section,
            status: SectionStatus::Present,
            matched_keywords,
            recommendation: None,
        });
    }

    CompletenessReport {
        sections,
        missing_sections,
    }
}

/// Sections with no keyword hit, in declaration order.
#[allow(dead_code)]
pub fn missing_sections(text: &str) -> Vec<Section> {
    check_sections(text).missing_sections
}
