use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which `PosTagger` implementation `main` builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaggerBackend {
    /// rust-bert POS model. Needs the `pretrained` cargo feature.
    Pretrained,
    /// Embedded rule-based lexicon, no download.
    Lexicon,
}

impl TaggerBackend {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretrained" => Some(TaggerBackend::Pretrained),
            "lexicon" => Some(TaggerBackend::Lexicon),
            _ => None,
        }
    }
}

impl Default for TaggerBackend {
    fn default() -> Self {
        if cfg!(feature = "pretrained") {
            TaggerBackend::Pretrained
        } else {
            TaggerBackend::Lexicon
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request body limit for uploads, enforced by the HTTP layer.
    pub max_upload_bytes: usize,
    pub tagger_backend: TaggerBackend,
    /// Extra `word<TAB>UPOS` entries for the lexicon backend.
    pub tagger_lexicon_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            tagger_backend: match std::env::var("TAGGER_BACKEND") {
                Ok(raw) => TaggerBackend::parse(&raw).with_context(|| {
                    format!("TAGGER_BACKEND must be `pretrained` or `lexicon`, got `{raw}`")
                })?,
                Err(_) => TaggerBackend::default(),
            },
            tagger_lexicon_path: std::env::var_os("TAGGER_LEXICON_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            tagger_backend: TaggerBackend::default(),
            tagger_lexicon_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagger_backend_parse() {
        assert_eq!(TaggerBackend::parse("lexicon"), Some(TaggerBackend::Lexicon));
        assert_eq!(TaggerBackend::parse(" Pretrained "), Some(TaggerBackend::Pretrained));
        assert_eq!(TaggerBackend::parse("spacy"), None);
    }

    #[test]
    fn test_default_backend_follows_features() {
        let expected = if cfg!(feature = "pretrained") {
            TaggerBackend::Pretrained
        } else {
            TaggerBackend::Lexicon
        };
        assert_eq!(Config::default().tagger_backend, expected);
    }
}
