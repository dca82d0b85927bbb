// src/analyze/mod.rs
//! Detectors that turn a tokenized text and its score distribution into labels:
//! sentiment/confidence/strength, category, urgency, emotions, key phrases.

pub mod phrases;
pub mod rules;
pub mod scoring;

// Re-export convenient types.
pub use crate::analyze::phrases::key_phrases;
pub use crate::analyze::rules::{categorize, detect_emotions, detect_urgency};
pub use crate::analyze::scoring::{classify, confidence, strength, Sentiment, Strength};
