//! Part-of-speech tagging seam.
//!
//! The skill extractor only ever sees a `&dyn PosTagger`. The model is built once
//! at startup and held in `AppState` as `Arc<dyn PosTagger>`. Backends must be
//! shareable across requests; any interior locking is their own business.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Universal POS categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
        }
    }

    /// Common nouns and proper nouns: the categories collected as skill tokens.
    pub fn is_noun_like(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Propn)
    }

    /// Function-word categories. A lexicon hit in one of these wins over
    /// capitalization cues ("The", "I").
    pub fn is_closed_class(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Adp
                | PartOfSpeech::Aux
                | PartOfSpeech::Cconj
                | PartOfSpeech::Det
                | PartOfSpeech::Part
                | PartOfSpeech::Pron
                | PartOfSpeech::Sconj
        )
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown part-of-speech tag '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for PartOfSpeech {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = match s.trim().to_ascii_uppercase().as_str() {
            "ADJ" => PartOfSpeech::Adj,
            "ADP" => PartOfSpeech::Adp,
            "ADV" => PartOfSpeech::Adv,
            "AUX" => PartOfSpeech::Aux,
            "CCONJ" => PartOfSpeech::Cconj,
            "DET" => PartOfSpeech::Det,
            "INTJ" => PartOfSpeech::Intj,
            "NOUN" => PartOfSpeech::Noun,
            "NUM" => PartOfSpeech::Num,
            "PART" => PartOfSpeech::Part,
            "PRON" => PartOfSpeech::Pron,
            "PROPN" => PartOfSpeech::Propn,
            "PUNCT" => PartOfSpeech::Punct,
            "SCONJ" => PartOfSpeech::Sconj,
            "SYM" => PartOfSpeech::Sym,
            "VERB" => PartOfSpeech::Verb,
            "X" => PartOfSpeech::X,
            _ => return Err(UnknownTag(s.trim().to_string())),
        };
        Ok(pos)
    }
}

/// A token with its surface form exactly as it appeared in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

/// The tagging model. Implement this to swap backends without touching the
/// extractor, handlers, or pipeline.
pub trait PosTagger: Send + Sync {
    /// Short backend identifier, surfaced on `/health`.
    fn name(&self) -> &'static str;

    /// Tokenizes `text` and assigns one category per token, in text order.
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}
