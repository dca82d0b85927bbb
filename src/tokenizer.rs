//! Text normalization shared by every detector.
//!
//! Lowercase, replace anything outside `[a-z\s]` with a space, collapse
//! whitespace, trim, split. Digits, punctuation, apostrophes and non-ASCII
//! letters all become separators ("don't" -> "don t").

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z\s]").expect("non-alpha regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Normalized text plus its token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub processed: String,
    pub tokens: Vec<String>,
}

pub fn preprocess(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = NON_ALPHA.replace_all(&lower, " ");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

pub fn tokenize(text: &str) -> Tokenized {
    let processed = preprocess(text);
    let tokens = processed
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    Tokenized { processed, tokens }
}
