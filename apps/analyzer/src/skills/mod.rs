//! Skill Token Extractor — collects noun and proper-noun tokens as candidate skills.
//!
//! This is a heuristic proxy, not a classifier: no stemming, lemmatization,
//! stop-word filtering or weighting. Tokens are kept exactly as written.

pub mod lexicon;
#[cfg(feature = "pretrained")]
pub mod pretrained;
pub mod tagger;
pub mod tokenizer;

use std::collections::HashSet;

use serde::Serialize;

pub use lexicon::LexiconTagger;
#[cfg(feature = "pretrained")]
pub use pretrained::PretrainedTagger;
pub use tagger::PosTagger;

/// Distinct skill tokens in first-occurrence order.
///
/// Equality is exact surface-form equality: `Rust` and `rust` are two skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|s| s == token)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-and-space joined, as displayed in the report.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }

    #[cfg(test)]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        SkillSet(
            iter.into_iter()
                .filter(|token| seen.insert(token.clone()))
                .collect(),
        )
    }
}

/// Tags `text` and keeps every NOUN/PROPN token, deduplicated by surface form.
pub fn extract_skills(tagger: &dyn PosTagger, text: &str) -> SkillSet {
    if text.is_empty() {
        return SkillSet::default();
    }
    tagger
        .tag(text)
        .into_iter()
        .filter(|token| token.pos.is_noun_like())
        .map(|token| token.text)
        .collect()
}
