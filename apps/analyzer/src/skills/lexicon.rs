//! `LexiconTagger`: offline fallback for the pre-trained model.
//!
//! Pure Rust, deterministic, no model download. Selected with
//! `TAGGER_BACKEND=lexicon` or when built without the `pretrained` feature.
//!
//! A token is tagged by, in order:
//! 1. shape: punctuation, symbols, numbers
//! 2. the lexicon, when the entry is a function word or the token is not proper-looking
//! 3. capitalization cues: capitalized mid-sentence, acronyms, inner capitals,
//!    `C++` / `Node.js` style names → PROPN
//! 4. suffix heuristics (`-ly`, `-ed`, `-ous`, ...); `-ing` is a verb at a
//!    sentence start or after a function word
//! 5. capitalized sentence-initial unknown word → PROPN, anything else → NOUN
//!
//! Extra entries can be layered on at startup from a TSV file (`word<TAB>UPOS`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::skills::tagger::{PartOfSpeech, PosTagger, TaggedToken};
use crate::skills::tokenizer::{tokenize, Token};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon line {line}: expected `word<TAB>TAG`")]
    Malformed { line: usize },

    #[error("lexicon line {line}: {source}")]
    UnknownTag {
        line: usize,
        #[source]
        source: crate::skills::tagger::UnknownTag,
    },
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "what", "which", "whose",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our",
    "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "someone", "anyone", "everyone", "something", "anything", "everything", "nothing",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under", "within", "without", "across", "along", "among", "around", "behind",
    "beyond", "despite", "except", "inside", "outside", "near", "per", "since", "toward",
    "towards", "upon", "via", "like", "than", "throughout", "onto", "amongst",
];

const COORDINATING: &[&str] = &["and", "or", "but", "nor", "yet", "plus", "&"];

const SUBORDINATING: &[&str] = &[
    "if", "because", "although", "though", "while", "whereas", "unless", "until", "whether",
    "as", "so", "once", "where", "when", "whenever",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "'re", "'ve", "'ll", "'d", "'m", "’re", "’ve", "’ll", "’d", "’m",
];

const PARTICLES: &[&str] = &["not", "'s", "’s", "n't", "n’t"];

const INTERJECTIONS: &[&str] = &["yes", "oh", "hello", "please", "thanks"];

const ADVERBS: &[&str] = &[
    "very", "also", "well", "just", "only", "then", "there", "here", "now", "currently",
    "recently", "highly", "often", "always", "never", "too", "again", "still", "already",
    "even", "more", "most", "less", "least", "how", "why", "e.g.", "i.e.", "etc", "approx",
    "otherwise", "likewise",
];

const VERBS: &[&str] = &[
    "led", "lead", "built", "build", "ran", "run", "made", "make", "wrote", "write", "taught",
    "teach", "won", "win", "grew", "grow", "drove", "drive", "took", "take", "gave", "give",
    "became", "become", "began", "begin", "brought", "bring", "held", "hold", "found", "kept",
    "keep", "got", "get", "know", "knew", "saw", "see", "spoke", "speak", "develop", "design",
    "manage", "create", "implement", "use", "maintain", "improve", "deliver", "ensure",
    "collaborate", "analyze", "analyse", "support", "mentor", "own", "oversee",
    "oversaw", "seeking", "apply", "rely", "reduce", "increase", "launch", "migrate", "ship",
    "deploy", "deployed", "monitor", "debug", "configure", "automate", "refactor", "integrate",
    "coordinate", "streamline", "resolve", "troubleshoot", "establish", "identify", "achieve",
    "perform", "prepare", "provide", "conduct", "contribute", "participate", "handle",
];

const ADJECTIVES: &[&str] = &[
    "good", "strong", "new", "senior", "junior", "excellent", "proficient", "familiar",
    "various", "several", "many", "much", "other", "key", "high", "low", "large", "small",
    "best", "fast", "able", "responsible", "multiple", "current", "previous", "cross",
    "advanced", "basic", "fluent", "native", "remote", "full", "agile", "scalable", "robust",
    "reliable", "independent", "oriented", "relevant", "major",
    "minor", "recent", "professional", "technical", "personal", "academic", "annual",
];

/// Open-class words whose suffix would otherwise mislead the heuristics.
const NOUNS: &[&str] = &[
    "family", "assembly", "supply", "reply", "speed", "objective", "executive", "initiative",
    "representative", "archive", "alternative", "incentive", "perspective", "directive",
    "motive", "need", "feed", "seed", "bed", "red", "shed", "detective", "variable", "table",
    "cable", "deliverable", "ability", "work", "expertise", "enterprise", "exercise",
    "franchise", "premise", "promise", "merchandise", "noise", "cruise", "expense",
];

const SYMBOL_CHARS: &[char] = &[
    '+', '$', '%', '&', '@', '#', '*', '=', '<', '>', '|', '~', '^', '€', '£', '¥', '©', '®',
    '°', '§',
];

/// Rule-based tagger over an embedded lexicon, optionally extended from a file.
pub struct LexiconTagger {
    lexicon: HashMap<String, PartOfSpeech>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Builds the tagger from the embedded tables only.
    pub fn new() -> Self {
        let tables: &[(&[&str], PartOfSpeech)] = &[
            (NOUNS, PartOfSpeech::Noun),
            (ADJECTIVES, PartOfSpeech::Adj),
            (VERBS, PartOfSpeech::Verb),
            (ADVERBS, PartOfSpeech::Adv),
            (INTERJECTIONS, PartOfSpeech::Intj),
            (PARTICLES, PartOfSpeech::Part),
            (AUXILIARIES, PartOfSpeech::Aux),
            (SUBORDINATING, PartOfSpeech::Sconj),
            (COORDINATING, PartOfSpeech::Cconj),
            (ADPOSITIONS, PartOfSpeech::Adp),
            (PRONOUNS, PartOfSpeech::Pron),
            (DETERMINERS, PartOfSpeech::Det),
        ];

        // Later tables win, so function words override open-class duplicates.
        let mut lexicon = HashMap::new();
        for (words, pos) in tables {
            for word in *words {
                lexicon.insert(word.to_string(), *pos);
            }
        }
        Self { lexicon }
    }

    /// Builds the tagger and layers entries from a TSV lexicon file on top.
    pub fn with_lexicon_file(path: &Path) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = parse_lexicon(&contents)?;

        let mut tagger = Self::new();
        let added = entries.len();
        tagger.lexicon.extend(entries);
        info!(path = %path.display(), entries = added, "Loaded tagger lexicon overrides");
        Ok(tagger)
    }

    fn classify(&self, token: &Token, previous: Option<PartOfSpeech>) -> PartOfSpeech {
        let text = token.text.as_str();

        if !text.chars().any(char::is_alphanumeric) {
            if text.chars().all(|c| SYMBOL_CHARS.contains(&c)) {
                return PartOfSpeech::Sym;
            }
            return PartOfSpeech::Punct;
        }
        if text.starts_with(|c: char| c.is_ascii_digit()) {
            return PartOfSpeech::Num;
        }

        let lower = text.to_lowercase();
        let proper = looks_proper(token);

        if let Some(pos) = self.lexicon.get(&lower) {
            if pos.is_closed_class() || !proper {
                return *pos;
            }
        }
        if proper {
            return PartOfSpeech::Propn;
        }
        let verb_slot = token.sentence_start || previous.is_some_and(opens_verb_slot);
        if let Some(pos) = suffix_pos(&lower, verb_slot) {
            return pos;
        }
        if token.sentence_start && text.starts_with(char::is_uppercase) {
            return PartOfSpeech::Propn;
        }
        PartOfSpeech::Noun
    }
}

impl PosTagger for LexiconTagger {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut previous = None;
        tokenize(text)
            .into_iter()
            .map(|token| {
                let pos = self.classify(&token, previous);
                previous = Some(pos);
                TaggedToken {
                    text: token.text,
                    pos,
                }
            })
            .collect()
    }
}

/// Parses `word<TAB>TAG` lines. Blank lines and `#` comments are skipped.
pub fn parse_lexicon(contents: &str) -> Result<Vec<(String, PartOfSpeech)>, LexiconError> {
    let mut entries = Vec::new();
    for (idx, raw) in contents.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (word, tag) = trimmed
            .split_once('\t')
            .ok_or(LexiconError::Malformed { line })?;
        let word = word.trim();
        if word.is_empty() {
            return Err(LexiconError::Malformed { line });
        }
        let pos = tag
            .parse::<PartOfSpeech>()
            .map_err(|source| LexiconError::UnknownTag { line, source })?;
        entries.push((word.to_lowercase(), pos));
    }
    Ok(entries)
}

fn looks_proper(token: &Token) -> bool {
    let text = token.text.as_str();
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return false;
    }

    let capitalized = text.starts_with(char::is_uppercase);
    let has_upper = letters.iter().any(|c| c.is_uppercase());
    let acronym = letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase());
    let inner_caps =
        text.chars().skip(1).any(char::is_uppercase) && letters.iter().any(|c| c.is_lowercase());
    let technical = text.contains(|c: char| c == '+' || c == '#') || (text.contains('.') && has_upper);

    (capitalized && !token.sentence_start) || acronym || inner_caps || technical
}

/// Categories after which an `-ing` form reads as a verb ("for testing", "and debugging").
fn opens_verb_slot(previous: PartOfSpeech) -> bool {
    matches!(
        previous,
        PartOfSpeech::Adp
            | PartOfSpeech::Cconj
            | PartOfSpeech::Sconj
            | PartOfSpeech::Pron
            | PartOfSpeech::Aux
    )
}

fn suffix_pos(lower: &str, verb_slot: bool) -> Option<PartOfSpeech> {
    let len = lower.chars().count();
    let ends = |suffix: &str, min_len: usize| len >= min_len && lower.ends_with(suffix);

    if ends("ly", 5) {
        return Some(PartOfSpeech::Adv);
    }
    if ends("ed", 5) || ends("ize", 6) || ends("ise", 6) || ends("ify", 6) {
        return Some(PartOfSpeech::Verb);
    }
    // After a noun a gerund is a compound head ("machine learning").
    if verb_slot && ends("ing", 6) {
        return Some(PartOfSpeech::Verb);
    }
    if ["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"]
        .iter()
        .any(|suffix| ends(suffix, suffix.len() + 3))
    {
        return Some(PartOfSpeech::Adj);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PartOfSpeech)> {
        LexiconTagger::new()
            .tag(text)
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    fn pos_of(text: &str, word: &str) -> PartOfSpeech {
        tags(text)
            .into_iter()
            .find(|(t, _)| t == word)
            .map(|(_, pos)| pos)
            .unwrap_or_else(|| panic!("token {word:?} not found in {text:?}"))
    }

    #[test]
    fn test_degree_sentence() {
        use PartOfSpeech::*;
        assert_eq!(
            tags("I have a Bachelor's degree in Computer Science"),
            vec![
                ("I".to_string(), Pron),
                ("have".to_string(), Aux),
                ("a".to_string(), Det),
                ("Bachelor".to_string(), Propn),
                ("'s".to_string(), Part),
                ("degree".to_string(), Noun),
                ("in".to_string(), Adp),
                ("Computer".to_string(), Propn),
                ("Science".to_string(), Propn),
            ]
        );
    }

    #[test]
    fn test_tech_names_are_proper_nouns() {
        let text = "Shipped services in Rust, C++ and Node.js on AWS with PostgreSQL";
        assert_eq!(pos_of(text, "Rust"), PartOfSpeech::Propn);
        assert_eq!(pos_of(text, "C++"), PartOfSpeech::Propn);
        assert_eq!(pos_of(text, "Node.js"), PartOfSpeech::Propn);
        assert_eq!(pos_of(text, "AWS"), PartOfSpeech::Propn);
        assert_eq!(pos_of(text, "PostgreSQL"), PartOfSpeech::Propn);
    }

    #[test]
    fn test_bullet_verbs_are_not_nouns() {
        assert_eq!(pos_of("Developed payment APIs", "Developed"), PartOfSpeech::Verb);
        assert_eq!(pos_of("• Led a team of 5", "Led"), PartOfSpeech::Verb);
        assert_eq!(pos_of("Designing pipelines", "Designing"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_sentence_initial_unknown_word_is_proper() {
        assert_eq!(pos_of("Python developer", "Python"), PartOfSpeech::Propn);
        assert_eq!(pos_of("Python developer", "developer"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_mid_sentence_gerund_is_noun() {
        assert_eq!(
            pos_of("Experience in machine learning", "learning"),
            PartOfSpeech::Noun
        );
    }

    #[test]
    fn test_action_verbs_are_not_nouns() {
        let text = "I deploy services and monitor clusters";
        assert_eq!(pos_of(text, "deploy"), PartOfSpeech::Verb);
        assert_eq!(pos_of(text, "monitor"), PartOfSpeech::Verb);
        assert_eq!(pos_of(text, "services"), PartOfSpeech::Noun);
        assert_eq!(pos_of(text, "clusters"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_gerund_after_function_word_is_verb() {
        let text = "Responsible for testing and debugging code";
        assert_eq!(pos_of(text, "testing"), PartOfSpeech::Verb);
        assert_eq!(pos_of(text, "debugging"), PartOfSpeech::Verb);
        assert_eq!(pos_of(text, "code"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_british_ise_verbs() {
        assert_eq!(pos_of("helped optimise queries", "optimise"), PartOfSpeech::Verb);
        assert_eq!(pos_of("domain expertise", "expertise"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_shape_categories() {
        assert_eq!(pos_of("Grew revenue 40 %", "40"), PartOfSpeech::Num);
        assert_eq!(pos_of("Grew revenue 40 %", "%"), PartOfSpeech::Sym);
        assert_eq!(pos_of("Rust, Go", ","), PartOfSpeech::Punct);
        assert_eq!(pos_of("2019-2021 at Acme", "2019-2021"), PartOfSpeech::Num);
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(pos_of("worked closely with design", "closely"), PartOfSpeech::Adv);
        assert_eq!(pos_of("a creative engineer", "creative"), PartOfSpeech::Adj);
        assert_eq!(pos_of("the family business", "family"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_function_word_wins_over_capitalization() {
        assert_eq!(pos_of("Skills And Tools", "And"), PartOfSpeech::Cconj);
        assert_eq!(pos_of("Projects For Fun", "For"), PartOfSpeech::Adp);
    }

    #[test]
    fn test_surface_form_is_preserved() {
        let tokens = LexiconTagger::new().tag("KUBERNETES kubernetes Kubernetes");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["KUBERNETES", "kubernetes", "Kubernetes"]);
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(LexiconTagger::new().tag("").is_empty());
    }

    #[test]
    fn test_parse_lexicon_skips_comments_and_blanks() {
        let entries = parse_lexicon("# overrides\n\nRust\tPROPN\nleverage\tverb\n").unwrap();
        assert_eq!(
            entries,
            vec![
                ("rust".to_string(), PartOfSpeech::Propn),
                ("leverage".to_string(), PartOfSpeech::Verb),
            ]
        );
    }

    #[test]
    fn test_parse_lexicon_reports_line_numbers() {
        let err = parse_lexicon("ok\tNOUN\nmissing-tab NOUN\n").unwrap_err();
        assert!(matches!(err, LexiconError::Malformed { line: 2 }));

        let err = parse_lexicon("ok\tNOUN\nfoo\tNNP\n").unwrap_err();
        assert!(matches!(err, LexiconError::UnknownTag { line: 2, .. }));
    }

    #[test]
    fn test_lexicon_file_overrides_embedded_entries() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "leverage\tVERB").unwrap();
        writeln!(file, "well\tNOUN").unwrap();

        let tagger = LexiconTagger::with_lexicon_file(file.path()).unwrap();
        let tokens = tagger.tag("we leverage the well");
        assert_eq!(tokens[1].pos, PartOfSpeech::Verb);
        assert_eq!(tokens[3].pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_missing_lexicon_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LexiconTagger::with_lexicon_file(&dir.path().join("absent.tsv"))
            .err()
            .unwrap();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
