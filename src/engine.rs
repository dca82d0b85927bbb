// src/engine.rs
//! Sentiment engine facade: tokenizer -> polarity scorer -> classifier, plus the
//! category and secondary detectors, combined into one `AnalysisResult`.
//!
//! The engine only reads its immutable `Lexicon`, so one instance can be shared
//! across threads without locking.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

use crate::analyze::{self, Sentiment, Strength};
use crate::debug::anon_hash;
use crate::error::Result;
use crate::lexicon::{Category, Emotion, Lexicon, Urgency};
use crate::sentiment::{score_tokens, ScoreDistribution};
use crate::summary::{self, BatchSummary};
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub scores: ScoreDistribution,
    pub category: Category,
    #[serde(rename = "urgency_level")]
    pub urgency: Urgency,
    pub emotions: BTreeSet<Emotion>,
    pub key_phrases: Vec<String>,
    pub sentiment_strength: Strength,
    pub word_count: usize,
    /// Length of the raw input in characters.
    pub text_length: usize,
    pub processed_text: String,
}

impl AnalysisResult {
    /// Neutral stand-in a caller returns when `analyze` fails.
    pub fn fallback(text: &str) -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: 0.5,
            scores: ScoreDistribution {
                positive: 0.33,
                neutral: 0.34,
                negative: 0.33,
            },
            category: Category::General,
            urgency: Urgency::Normal,
            emotions: BTreeSet::new(),
            key_phrases: Vec::new(),
            sentiment_strength: Strength::Weak,
            word_count: 0,
            text_length: text.chars().count(),
            processed_text: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentimentEngine {
    lexicon: Arc<Lexicon>,
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

impl SentimentEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_shared(Arc::new(lexicon))
    }

    pub fn with_shared(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze one text. Empty or blank text is a valid input and yields a
    /// Neutral result from the fallback distribution.
    ///
    /// Errors only on an internal invariant violation while normalizing scores.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let lx = self.lexicon.as_ref();
        let tokenized = tokenize(text);

        let tally = score_tokens(lx, &tokenized.tokens);
        let scores = ScoreDistribution::from_tally(tally)?;
        let sentiment = analyze::classify(&scores);

        let result = AnalysisResult {
            sentiment,
            confidence: analyze::confidence(&scores),
            scores,
            category: analyze::categorize(lx, &tokenized.processed),
            urgency: analyze::detect_urgency(lx, &tokenized.processed),
            emotions: analyze::detect_emotions(lx, &tokenized.processed),
            key_phrases: analyze::key_phrases(lx, &tokenized.tokens),
            sentiment_strength: analyze::strength(&scores),
            word_count: tokenized.tokens.len(),
            text_length: text.chars().count(),
            processed_text: tokenized.processed,
        };

        debug!(
            target: "sentiment",
            id = %anon_hash(text),
            sentiment = result.sentiment.as_str(),
            confidence = result.confidence,
            category = result.category.as_str(),
            urgency = result.urgency.as_str(),
            pos = tally.positive,
            neg = tally.negative,
            "analyzed"
        );

        Ok(result)
    }

    /// Element-wise `analyze` on the rayon pool; output order matches input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Result<AnalysisResult>>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    pub fn summarize(&self, results: &[AnalysisResult]) -> BatchSummary {
        summary::summarize(results)
    }
}
