pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/report", post(handlers::handle_report))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
