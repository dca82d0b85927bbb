//! Label, confidence and strength derived from a `ScoreDistribution`.
//!
//! Confidence = 0.5 + 0.45 * (top1 - top2), so it always lies in [0.5, 0.95]:
//! a clear gap between the winner and the runner-up scores high, a tie scores 0.5.

use serde::{Deserialize, Serialize};

use crate::sentiment::{round_to, ScoreDistribution};

/// Minimum winning share for a Positive/Negative label.
pub const LABEL_THRESHOLD: f64 = 0.4;

const CONFIDENCE_FLOOR: f64 = 0.5;
const CONFIDENCE_SPAN: f64 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    #[serde(rename = "Very Strong")]
    VeryStrong,
    Strong,
    Moderate,
    Weak,
}

/// Positive wins over Negative when both share the max; a max at or below
/// the threshold is Neutral.
pub fn classify(scores: &ScoreDistribution) -> Sentiment {
    let max = scores.max();
    if scores.positive == max && scores.positive > LABEL_THRESHOLD {
        Sentiment::Positive
    } else if scores.negative == max && scores.negative > LABEL_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

pub fn confidence(scores: &ScoreDistribution) -> f64 {
    let [top1, top2, _] = scores.sorted_desc();
    let gap = (top1 - top2).clamp(0.0, 1.0);
    round_to(CONFIDENCE_FLOOR + gap * CONFIDENCE_SPAN, 3)
}

pub fn strength(scores: &ScoreDistribution) -> Strength {
    let max = scores.max();
    if max >= 0.8 {
        Strength::VeryStrong
    } else if max >= 0.6 {
        Strength::Strong
    } else if max >= 0.4 {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}
