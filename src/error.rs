//! Error types for the sentiment engine.
//!
//! The engine is total over its input text; the only way `analyze` fails is an
//! internal invariant violation (a broken lexicon or an arithmetic bug). Those
//! are surfaced as errors so callers can log them instead of masking them.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The raw ratios could not be renormalized (zero, negative or non-finite total).
    #[error("score distribution could not be normalized (total={total})")]
    Normalization { total: f64 },

    /// The normalized distribution has a negative or non-finite component,
    /// or does not sum to one.
    #[error(
        "score distribution violates invariant (positive={positive}, neutral={neutral}, negative={negative})"
    )]
    Distribution {
        positive: f64,
        neutral: f64,
        negative: f64,
    },
}
