//! HTTP surface for the dashboard: request validation, engine calls, and the
//! neutral fallback when the engine reports an invariant failure.

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::debug::anon_hash;
use crate::engine::{AnalysisResult, SentimentEngine};
use crate::handle::EngineHandle;
use crate::lexicon::LexiconStats;
use crate::metrics::{ANALYZE_DURATION_MS, ANALYZE_TOTAL, ENGINE_FAILURES_TOTAL};
use crate::summary::BatchSummary;

pub const NO_TEXT_MESSAGE: &str = "No text provided for analysis";
pub const NO_TEXTS_MESSAGE: &str = "No texts provided for analysis";

#[derive(Clone)]
pub struct AppState {
    pub engine: EngineHandle,
}

impl AppState {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .route("/analyze_sentiment", post(analyze))
        .route("/analyze_batch", post(analyze_batch))
        .route("/lexicon", get(lexicon_stats))
        .route("/admin/reload-lexicon", post(admin_reload_lexicon))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug)]
pub enum ApiError {
    MissingText,
    MissingTexts,
    Reload(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::MissingText => (StatusCode::BAD_REQUEST, NO_TEXT_MESSAGE.to_string()),
            ApiError::MissingTexts => (StatusCode::BAD_REQUEST, NO_TEXTS_MESSAGE.to_string()),
            ApiError::Reload(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("lexicon reload failed: {e:#}"),
            ),
        };
        (status, Json(json!({ "error": msg }))).into_response()
    }
}

#[derive(Deserialize)]
struct AnalyzeReq {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct BatchReq {
    #[serde(default)]
    texts: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResp {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub analysis_timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchResp {
    pub results: Vec<AnalyzeResp>,
    pub summary: BatchSummary,
}

/// Analyze one text; on engine failure log it and answer with the fallback.
fn run_analysis(engine: &SentimentEngine, text: &str) -> AnalyzeResp {
    let started = Instant::now();
    let outcome = engine.analyze(text);
    histogram!(ANALYZE_DURATION_MS).record(started.elapsed().as_secs_f64() * 1000.0);
    finish(text, outcome)
}

fn finish(text: &str, outcome: crate::error::Result<AnalysisResult>) -> AnalyzeResp {
    let analysis_timestamp = chrono::Utc::now().to_rfc3339();
    match outcome {
        Ok(result) => {
            counter!(ANALYZE_TOTAL, "sentiment" => result.sentiment.as_str()).increment(1);
            AnalyzeResp {
                result,
                analysis_timestamp,
                error: None,
            }
        }
        Err(e) => {
            error!(target: "sentiment", id = %anon_hash(text), error = %e, "analysis failed, using fallback");
            counter!(ENGINE_FAILURES_TOTAL).increment(1);
            AnalyzeResp {
                result: AnalysisResult::fallback(text),
                analysis_timestamp,
                error: Some(e.to_string()),
            }
        }
    }
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalyzeResp>, ApiError> {
    let text = body.text.ok_or(ApiError::MissingText)?;
    let engine = state.engine.current();
    Ok(Json(run_analysis(&engine, &text)))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(body): Json<BatchReq>,
) -> Result<Json<BatchResp>, ApiError> {
    let texts = body.texts.ok_or(ApiError::MissingTexts)?;
    let engine = state.engine.current();

    let started = Instant::now();
    let outcomes = engine.analyze_batch(&texts[..]);
    if !texts.is_empty() {
        let per_text = started.elapsed().as_secs_f64() * 1000.0 / texts.len() as f64;
        histogram!(ANALYZE_DURATION_MS).record(per_text);
    }

    let results: Vec<AnalyzeResp> = texts
        .iter()
        .zip(outcomes)
        .map(|(text, outcome)| finish(text, outcome))
        .collect();
    let analyzed: Vec<AnalysisResult> = results.iter().map(|r| r.result.clone()).collect();
    let summary = engine.summarize(&analyzed);

    Ok(Json(BatchResp { results, summary }))
}

async fn lexicon_stats(State(state): State<AppState>) -> Json<LexiconStats> {
    Json(state.engine.current().lexicon().stats())
}

async fn admin_reload_lexicon(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    state.engine.reload().map_err(ApiError::Reload)?;
    Ok("reloaded")
}
