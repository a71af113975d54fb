//! `PretrainedTagger`: rust-bert's token-classification POS pipeline.
//!
//! The model predicts Penn Treebank labels; they are folded onto the Universal
//! set here so the extractor never sees backend-specific tags.

use std::sync::{Mutex, PoisonError};

use rust_bert::pipelines::pos_tagging::{POSConfig, POSModel};
use rust_bert::RustBertError;
use tracing::{debug, info};

use crate::skills::tagger::{PartOfSpeech, PosTagger, TaggedToken};

/// Lines sent to the model per forward pass.
const BATCH_LINES: usize = 32;

pub struct PretrainedTagger {
    model: Mutex<POSModel>,
}

impl PretrainedTagger {
    /// Loads the default English POS model. Downloads weights on first use, so
    /// call it off the async runtime.
    pub fn load() -> Result<Self, RustBertError> {
        let model = POSModel::new(POSConfig::default())?;
        info!("Pre-trained POS model loaded");
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl PosTagger for PretrainedTagger {
    fn name(&self) -> &'static str {
        "mobilebert-pos"
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Vec::new();
        }

        let model = self.model.lock().unwrap_or_else(PoisonError::into_inner);
        let mut tokens = Vec::new();
        for batch in lines.chunks(BATCH_LINES) {
            for sentence in model.predict(batch) {
                tokens.extend(sentence.into_iter().map(|tag| TaggedToken {
                    pos: from_model_label(&tag.label),
                    text: tag.word,
                }));
            }
        }
        debug!(lines = lines.len(), tokens = tokens.len(), "tagged text");
        tokens
    }
}

/// Penn Treebank → Universal. Labels already in the Universal set pass through;
/// anything else is `X`.
pub fn from_model_label(label: &str) -> PartOfSpeech {
    match label {
        "NN" | "NNS" => PartOfSpeech::Noun,
        "NNP" | "NNPS" => PartOfSpeech::Propn,
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => PartOfSpeech::Verb,
        "MD" => PartOfSpeech::Aux,
        "JJ" | "JJR" | "JJS" => PartOfSpeech::Adj,
        "RB" | "RBR" | "RBS" | "WRB" => PartOfSpeech::Adv,
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => PartOfSpeech::Pron,
        "DT" | "PDT" | "WDT" => PartOfSpeech::Det,
        "IN" => PartOfSpeech::Adp,
        "CC" => PartOfSpeech::Cconj,
        "CD" => PartOfSpeech::Num,
        "RP" | "TO" | "POS" => PartOfSpeech::Part,
        "UH" => PartOfSpeech::Intj,
        "SYM" | "$" | "#" => PartOfSpeech::Sym,
        "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "(" | ")" | "HYPH" | "NFP" => {
            PartOfSpeech::Punct
        }
        other => other.parse().unwrap_or(PartOfSpeech::X),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treebank_nouns_map_to_noun_like() {
        for label in ["NN", "NNS", "NNP", "NNPS"] {
            assert!(from_model_label(label).is_noun_like(), "{label}");
        }
        assert_eq!(from_model_label("NNP"), PartOfSpeech::Propn);
    }

    #[test]
    fn test_treebank_verbs_are_not_noun_like() {
        for label in ["VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "MD"] {
            assert!(!from_model_label(label).is_noun_like(), "{label}");
        }
        assert_eq!(from_model_label("VBG"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_function_word_labels() {
        assert_eq!(from_model_label("IN"), PartOfSpeech::Adp);
        assert_eq!(from_model_label("CC"), PartOfSpeech::Cconj);
        assert_eq!(from_model_label("DT"), PartOfSpeech::Det);
        assert_eq!(from_model_label("PRP$"), PartOfSpeech::Pron);
        assert_eq!(from_model_label("POS"), PartOfSpeech::Part);
        assert_eq!(from_model_label(","), PartOfSpeech::Punct);
        assert_eq!(from_model_label("CD"), PartOfSpeech::Num);
    }

    #[test]
    fn test_universal_labels_pass_through() {
        assert_eq!(from_model_label("PROPN"), PartOfSpeech::Propn);
        assert_eq!(from_model_label("NOUN"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_x() {
        assert_eq!(from_model_label("FW"), PartOfSpeech::X);
        assert_eq!(from_model_label("LS"), PartOfSpeech::X);
        assert_eq!(from_model_label(""), PartOfSpeech::X);
    }
}
