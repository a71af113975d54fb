mod analysis;
mod config;
mod errors;
mod extraction;
mod report;
mod routes;
mod sections;
mod skills;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, TaggerBackend};
use crate::routes::build_router;
use crate::skills::{LexiconTagger, PosTagger};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Load the tagger once; it is shared across requests
    let tagger = build_tagger(&config).await?;
    info!("POS tagger initialized ({})", tagger.name());
    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let state = AppState {
        config: config.clone(),
        tagger,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_tagger(config: &Config) -> Result<Arc<dyn PosTagger>> {
    match config.tagger_backend {
        TaggerBackend::Pretrained => load_pretrained_tagger().await,
        TaggerBackend::Lexicon => match &config.tagger_lexicon_path {
            Some(path) => Ok(Arc::new(LexiconTagger::with_lexicon_file(path).with_context(
                || format!("failed to load tagger lexicon {}", path.display()),
            )?)),
            None => Ok(Arc::new(LexiconTagger::new())),
        },
    }
}

/// Model download and load are blocking, so they run on the blocking pool.
#[cfg(feature = "pretrained")]
async fn load_pretrained_tagger() -> Result<Arc<dyn PosTagger>> {
    let tagger = tokio::task::spawn_blocking(skills::PretrainedTagger::load)
        .await
        .context("POS model loader task failed")?
        .context("failed to load the pre-trained POS model")?;
    Ok(Arc::new(tagger))
}

#[cfg(not(feature = "pretrained"))]
async fn load_pretrained_tagger() -> Result<Arc<dyn PosTagger>> {
    anyhow::bail!("TAGGER_BACKEND=pretrained needs a build with the `pretrained` feature")
}
