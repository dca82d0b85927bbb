// tests/engine_examples.rs
// End-to-end behavior of the engine on hand-picked complaint texts.

use churn_sentiment::sentiment::score_tokens;
use churn_sentiment::tokenizer::tokenize;
use churn_sentiment::{
    Category, Emotion, Lexicon, ScoreDistribution, Sentiment, SentimentEngine, Urgency,
};

fn engine() -> SentimentEngine {
    SentimentEngine::default()
}

#[test]
fn empty_text_is_neutral_fallback() {
    let r = engine().analyze("").expect("empty text is valid");
    assert_eq!(r.sentiment, Sentiment::Neutral);
    assert_eq!(r.word_count, 0);
    assert_eq!(r.text_length, 0);
    assert_eq!(r.scores, ScoreDistribution::FALLBACK);
    assert_eq!(r.category, Category::General);
    assert_eq!(r.urgency, Urgency::Normal);
    assert!(r.emotions.is_empty());
    assert!(r.key_phrases.is_empty());
    assert_eq!(r.processed_text, "");
}

#[test]
fn whitespace_only_text_matches_empty() {
    let e = engine();
    let blank = e.analyze("   \n\t  ").unwrap();
    let empty = e.analyze("").unwrap();
    assert_eq!(blank.scores, empty.scores);
    assert_eq!(blank.sentiment, empty.sentiment);
    assert_eq!(blank.word_count, 0);
}

#[test]
fn negation_is_not_positive() {
    let r = engine().analyze("not good").unwrap();
    assert_ne!(r.sentiment, Sentiment::Positive);
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert_eq!(r.scores.negative, 1.0);
}

#[test]
fn intensifier_scales_negative_contribution() {
    let lx = Lexicon::default();
    let plain = score_tokens(&lx, &tokenize("bad").tokens);
    let boosted = score_tokens(&lx, &tokenize("very bad").tokens);
    assert!(boosted.negative > plain.negative);
    assert_eq!(boosted.negative, 1.5);
}

#[test]
fn intensifier_shifts_mixed_distribution() {
    let e = engine();
    let flat = e.analyze("good but bad").unwrap();
    let boosted = e.analyze("good but extremely bad").unwrap();
    assert_eq!(flat.scores.negative, 0.5);
    assert_eq!(boosted.scores.negative, 0.667);
    assert_eq!(boosted.sentiment, Sentiment::Negative);
    // tie between positive and negative leans Positive
    assert_eq!(flat.sentiment, Sentiment::Positive);
    assert_eq!(flat.confidence, 0.5);
}

#[test]
fn terrible_slow_service_is_negative_technical() {
    let r = engine().analyze("This service is terrible and slow").unwrap();
    assert_eq!(r.sentiment, Sentiment::Negative);
    // one keyword each for Technical ("slow") and Service ("service");
    // Technical is declared first
    assert_eq!(r.category, Category::Technical);
    assert_eq!(r.confidence, 0.95);
    assert_eq!(
        r.key_phrases,
        vec!["service is terrible and slow", "terrible and slow"]
    );
}

#[test]
fn thankful_support_is_positive_service_gratitude() {
    let r = engine()
        .analyze("Thank you, the support was excellent and quick")
        .unwrap();
    assert_eq!(r.sentiment, Sentiment::Positive);
    assert_eq!(r.category, Category::Service);
    assert!(r.emotions.contains(&Emotion::Gratitude));
    assert_eq!(r.urgency, Urgency::Normal);
    assert_eq!(r.word_count, 8);
}

#[test]
fn analysis_is_deterministic() {
    let e = engine();
    let text = "I was charged twice, the agent was rude and I want a refund ASAP!";
    let a = e.analyze(text).unwrap();
    let b = e.analyze(text).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn result_serializes_with_dashboard_field_names() {
    let r = engine().analyze("Please fix my internet soon").unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["sentiment"], "Neutral");
    assert_eq!(v["urgency_level"], "Medium");
    assert_eq!(v["category"], "Technical");
    assert_eq!(v["sentiment_strength"], "Strong");
    assert!(v["scores"]["neutral"].is_number());
    assert!(v["emotions"].is_array());
}

#[test]
fn tied_ratios_round_half_to_even() {
    let text = format!("good {}", "bad ".repeat(15));
    let r = engine().analyze(&text).unwrap();
    assert_eq!(r.scores.positive, 0.062);
    assert_eq!(r.scores.negative, 0.938);
    assert_eq!(r.scores.neutral, 0.0);
    assert!((r.scores.sum() - 1.0).abs() < 1e-9, "{:?}", r.scores);
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert_eq!(r.confidence, 0.894);
}
