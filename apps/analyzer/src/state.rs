use std::sync::Arc;

use crate::config::Config;
use crate::skills::PosTagger;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Tagging model, loaded once at startup and only ever read afterwards.
    pub tagger: Arc<dyn PosTagger>,
}
