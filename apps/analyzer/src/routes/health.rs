use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::skills::PosTagger;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and tagging backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-analyzer",
        "tagger": state.tagger.name()
    }))
}
