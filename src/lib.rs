// src/lib.rs
// Public library surface for the binary, integration tests, and the dashboard backend.

pub mod api;
pub mod debug;
pub mod engine;
pub mod error;
pub mod handle;
pub mod lexicon;
pub mod metrics;
pub mod sentiment;
pub mod summary;
pub mod tokenizer;

// Detectors (classifier, categorizer, urgency/emotion rules, key phrases)
pub mod analyze;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{Sentiment, Strength};
pub use crate::engine::{AnalysisResult, SentimentEngine};
pub use crate::error::EngineError;
pub use crate::lexicon::{Category, Emotion, Lexicon, Urgency};
pub use crate::sentiment::ScoreDistribution;
pub use crate::summary::{summarize, BatchSummary};
