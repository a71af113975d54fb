//! Rule-based word tokenizer.
//!
//! Whitespace split first, then each chunk is peeled: leading punctuation,
//! trailing punctuation, one clitic (`'s`, `n't`, ...), and finally hyphen or
//! slash infixes between letters (`full-stack` → `full` `-` `stack`).
//! Internal dots and symbols stay attached so `Node.js`, `C++` and `C#`
//! survive as single tokens.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// First word of a line or of a sentence. Punctuation never starts one.
    pub sentence_start: bool,
}

const PREFIX_CHARS: &[char] = &[
    '"', '\'', '(', '[', '{', '<', '“', '‘', '«', '•', '●', '▪', '◦', '*', '-', '–', '—', '·',
];

const SUFFIX_CHARS: &[char] = &[
    '"', '\'', ')', ']', '}', '>', '”', '’', '»', '.', ',', ';', ':', '!', '?', '…',
];

const CLITICS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

const SENTENCE_END: &[&str] = &[".", "!", "?", "…"];

pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pieces = Vec::new();

    for line in text.lines() {
        let mut sentence_start = true;
        for chunk in line.split_whitespace() {
            pieces.clear();
            split_chunk(chunk, &mut pieces);
            for piece in &pieces {
                let is_word = piece.chars().any(char::is_alphanumeric);
                tokens.push(Token {
                    text: piece.to_string(),
                    sentence_start: sentence_start && is_word,
                });
                if is_word {
                    sentence_start = false;
                } else if SENTENCE_END.contains(piece) {
                    sentence_start = true;
                }
            }
        }
    }
    tokens
}

fn split_chunk<'a>(chunk: &'a str, out: &mut Vec<&'a str>) {
    if !chunk.chars().any(char::is_alphanumeric) {
        out.push(chunk);
        return;
    }
    let mut rest = chunk;

    while let Some(c) = rest.chars().next() {
        let width = c.len_utf8();
        if rest.len() == width || !PREFIX_CHARS.contains(&c) {
            break;
        }
        out.push(&rest[..width]);
        rest = &rest[width..];
    }

    let mut suffixes = Vec::new();
    while let Some(c) = rest.chars().next_back() {
        let split = rest.len() - c.len_utf8();
        if split == 0 || !SUFFIX_CHARS.contains(&c) {
            break;
        }
        if c == '.' && is_abbreviation(rest) {
            break;
        }
        suffixes.push(&rest[split..]);
        rest = &rest[..split];
    }

    let mut clitic = None;
    for suffix in CLITICS {
        if rest.len() <= suffix.len() {
            continue;
        }
        let split = rest.len() - suffix.len();
        if rest.is_char_boundary(split) && rest[split..].eq_ignore_ascii_case(suffix) {
            clitic = Some(&rest[split..]);
            rest = &rest[..split];
            break;
        }
    }

    push_infixes(rest, out);
    out.extend(clitic);
    out.extend(suffixes.iter().rev());
}

/// `U.S.`, `Ph.D.`, `e.g.`: dot-separated segments of at most two letters.
fn is_abbreviation(word: &str) -> bool {
    let body = word.strip_suffix('.').unwrap_or(word);
    let segments: Vec<&str> = body.split('.').collect();
    segments.len() >= 2
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment.chars().count() <= 2
                && segment.chars().all(char::is_alphabetic)
        })
}

fn push_infixes<'a>(word: &'a str, out: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len().saturating_sub(1) {
        let (idx, c) = chars[i];
        if (c == '-' || c == '/') && chars[i - 1].1.is_alphabetic() && chars[i + 1].1.is_alphabetic()
        {
            out.push(&word[start..idx]);
            out.push(&word[idx..idx + c.len_utf8()]);
            start = idx + c.len_utf8();
        }
    }
    if start < word.len() {
        out.push(&word[start..]);
    }
}
