//! Polarity scoring: one pass over the token sequence, then normalization into
//! a positive / neutral / negative distribution.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::lexicon::Lexicon;

/// Look-back depth for negation markers.
pub const NEGATION_WINDOW: usize = 2;

const UNIT_SCORE: f64 = 1.0;

const FALLBACK_POSITIVE: f64 = 0.2;
const FALLBACK_NEUTRAL: f64 = 0.6;
const FALLBACK_NEGATIVE: f64 = 0.2;

/// Raw accumulators before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarityTally {
    pub positive: f64,
    pub negative: f64,
}

impl PolarityTally {
    pub fn total(&self) -> f64 {
        self.positive + self.negative
    }
}

/// Walk the tokens once, attributing each sentiment word to an accumulator.
///
/// The previous token may scale the unit score (intensifier). A negation in
/// either of the two previous tokens flips the word into the opposite
/// accumulator; the nearer hit is not weighted higher.
pub fn score_tokens(lexicon: &Lexicon, tokens: &[String]) -> PolarityTally {
    let mut tally = PolarityTally::default();

    for (i, tok) in tokens.iter().enumerate() {
        let w = tok.as_str();
        let positive = lexicon.is_positive(w);
        if !positive && !lexicon.is_negative(w) {
            continue;
        }

        let intensifier = if i > 0 {
            lexicon.intensifier(tokens[i - 1].as_str()).unwrap_or(1.0)
        } else {
            1.0
        };
        let negated =
            (1..=NEGATION_WINDOW).any(|k| i >= k && lexicon.is_negation(tokens[i - k].as_str()));

        // unit score scaled by the intensifier
        let score = UNIT_SCORE * intensifier;
        // negation sends the word to the opposite accumulator
        if positive != negated {
            tally.positive += score;
        } else {
            tally.negative += score;
        }
    }

    tally
}

/// Three-way score distribution, each component rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl ScoreDistribution {
    /// Distribution used when no sentiment word was found.
    pub const FALLBACK: ScoreDistribution = ScoreDistribution {
        positive: FALLBACK_POSITIVE,
        neutral: FALLBACK_NEUTRAL,
        negative: FALLBACK_NEGATIVE,
    };

    /// Normalize raw accumulators. Fails only if the arithmetic produces a
    /// distribution that cannot sum to one (e.g. non-finite accumulators).
    pub fn from_tally(tally: PolarityTally) -> Result<Self> {
        let s = tally.total();
        let (positive, negative, neutral) = if s > 0.0 {
            let p = tally.positive / s;
            let n = tally.negative / s;
            (p, n, (1.0 - p - n).max(0.0))
        } else if s == 0.0 {
            (FALLBACK_POSITIVE, FALLBACK_NEGATIVE, FALLBACK_NEUTRAL)
        } else {
            return Err(EngineError::Normalization { total: s });
        };

        let total = positive + negative + neutral;
        if !total.is_finite() || total <= 0.0 {
            return Err(EngineError::Normalization { total });
        }
        let (positive, negative, neutral) = (positive / total, negative / total, neutral / total);

        let parts = [positive, neutral, negative];
        if parts.iter().any(|x| !x.is_finite() || *x < 0.0)
            || (parts.iter().sum::<f64>() - 1.0).abs() > 1e-6
        {
            return Err(EngineError::Distribution {
                positive,
                neutral,
                negative,
            });
        }

        Ok(Self {
            positive: round_to(positive, 3),
            neutral: round_to(neutral, 3),
            negative: round_to(negative, 3),
        })
    }

    pub fn max(&self) -> f64 {
        self.positive.max(self.neutral).max(self.negative)
    }

    /// Components sorted from largest to smallest.
    pub fn sorted_desc(&self) -> [f64; 3] {
        let mut v = [self.positive, self.neutral, self.negative];
        v.sort_by(|a, b| b.total_cmp(a));
        v
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }
}

/// Round to `places` decimals, exact ties going to the even digit.
pub(crate) fn round_to(x: f64, places: i32) -> f64 {
    let m = 10f64.powi(places);
    (x * m).round_ties_even() / m
}
