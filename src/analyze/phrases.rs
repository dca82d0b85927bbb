//! Key-phrase extraction for explainability: a short token window around
//! every sentiment word.

use crate::lexicon::Lexicon;

pub const MAX_KEY_PHRASES: usize = 3;
/// Tokens kept on each side of the sentiment word.
pub const PHRASE_CONTEXT: usize = 2;

/// Up to `MAX_KEY_PHRASES` distinct phrases, in order of first occurrence.
pub fn key_phrases(lexicon: &Lexicon, tokens: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (i, tok) in tokens.iter().enumerate() {
        if !lexicon.is_sentiment_word(tok) {
            continue;
        }
        let start = i.saturating_sub(PHRASE_CONTEXT);
        let end = (i + PHRASE_CONTEXT + 1).min(tokens.len());
        let phrase = tokens[start..end].join(" ");
        if !out.contains(&phrase) {
            out.push(phrase);
            if out.len() == MAX_KEY_PHRASES {
                break;
            }
        }
    }
    out
}
