//! Complaint Sentiment Service: Binary Entrypoint
//! Boots the Axum HTTP server, wiring the engine handle, metrics, and hot reload.

use anyhow::Context;
use shuttle_axum::ShuttleAxum;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use churn_sentiment::api::{self, AppState};
use churn_sentiment::debug::dev_logging_enabled;
use churn_sentiment::handle::{start_hot_reload_thread, EngineHandle};
use churn_sentiment::metrics::Metrics;
use churn_sentiment::{Lexicon, SentimentEngine};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - SENTIMENT_DEV_LOG=1
fn enable_dev_tracing() {
    if !dev_logging_enabled() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sentiment=debug,lexicon=info,warn"));

    // The runtime may already own a global subscriber; keep it in that case.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let lexicon = Lexicon::load().context("Failed to load lexicon")?;
    let handle = EngineHandle::new(SentimentEngine::new(lexicon));
    start_hot_reload_thread(handle.clone(), Lexicon::config_path());

    let metrics = Metrics::init()?;
    let router = api::router(AppState::new(handle)).merge(metrics.router());

    info!(target: "sentiment", "complaint sentiment service ready");
    Ok(router.into())
}
