//! Keyword rules over the processed text: category, urgency tier, emotions.
//!
//! Matching is plain substring containment on the already-normalized text,
//! not token equality. "billing" therefore also hits the keyword "bill", and
//! "download" hits "down". Each keyword counts at most once per text.

use std::collections::BTreeSet;

use crate::lexicon::{Category, Emotion, Lexicon, Urgency};

/// Number of `keywords` contained anywhere in `text`.
pub fn count_contained(text: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|k| !k.is_empty() && text.contains(k.as_str()))
        .count()
}

/// Best-scoring category group; ties go to the first group in declared order.
/// `General` when no keyword of any group matches.
pub fn categorize(lexicon: &Lexicon, processed: &str) -> Category {
    let mut best: Option<(Category, usize)> = None;
    for group in lexicon.categories() {
        let n = count_contained(processed, &group.keywords);
        if n > 0 && best.map_or(true, |(_, top)| n > top) {
            best = Some((group.tag, n));
        }
    }
    best.map(|(c, _)| c).unwrap_or(Category::General)
}

/// Any High keyword wins; two or more Medium keywords give Medium; a single
/// Medium or any Low keyword gives Low.
pub fn detect_urgency(lexicon: &Lexicon, processed: &str) -> Urgency {
    let (mut high, mut medium, mut low) = (0, 0, 0);
    for tier in lexicon.urgency_tiers() {
        let n = count_contained(processed, &tier.keywords);
        match tier.tag {
            Urgency::High => high += n,
            Urgency::Medium => medium += n,
            Urgency::Low => low += n,
            Urgency::Normal => {}
        }
    }

    if high > 0 {
        Urgency::High
    } else if medium > 1 {
        Urgency::Medium
    } else if medium > 0 || low > 0 {
        Urgency::Low
    } else {
        Urgency::Normal
    }
}

pub fn detect_emotions(lexicon: &Lexicon, processed: &str) -> BTreeSet<Emotion> {
    lexicon
        .emotions()
        .iter()
        .filter(|g| count_contained(processed, &g.keywords) > 0)
        .map(|g| g.tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::preprocess;

    #[test]
    fn substring_matching_counts_each_keyword_once() {
        let kws = vec!["bill".to_string(), "billing".to_string(), "fee".to_string()];
        assert_eq!(count_contained("billing billing billing", &kws), 2);
        assert_eq!(count_contained("coffee", &kws), 1);
        assert_eq!(count_contained("", &kws), 0);
    }

    #[test]
    fn category_highest_count_wins() {
        let lx = Lexicon::default();
        let t = preprocess("Wrong invoice: I was charged a fee twice on my bill");
        assert_eq!(categorize(&lx, &t), Category::Billing);

        let t = preprocess("The modem keeps dropping the wifi connection");
        assert_eq!(categorize(&lx, &t), Category::Technical);

        assert_eq!(categorize(&lx, "nothing to see"), Category::General);
    }

    #[test]
    fn category_tie_goes_to_declared_order() {
        let lx = Lexicon::default();
        // Technical: slow; Service: service
        let t = preprocess("This service is terrible and slow");
        assert_eq!(categorize(&lx, &t), Category::Technical);
        // Service: phone; Product: plan
        assert_eq!(categorize(&lx, "my phone plan"), Category::Service);
    }

    #[test]
    fn urgency_tiers() {
        let lx = Lexicon::default();
        assert_eq!(detect_urgency(&lx, "this is urgent"), Urgency::High);
        // "help" is a High keyword and a substring of "helpful"
        assert_eq!(detect_urgency(&lx, "very helpful staff"), Urgency::High);
        assert_eq!(detect_urgency(&lx, "please fix it"), Urgency::Medium);
        assert_eq!(detect_urgency(&lx, "please look at it"), Urgency::Low);
        assert_eq!(detect_urgency(&lx, "whenever you can"), Urgency::Low);
        assert_eq!(detect_urgency(&lx, "all fine"), Urgency::Normal);
    }

    #[test]
    fn urgency_follows_configured_tiers_in_any_order() {
        let lx = Lexicon::from_toml_str(
            r#"
positive = []
negative = []

[[urgency]]
tag = "Low"
keywords = ["someday"]

[[urgency]]
tag = "High"
keywords = ["outage"]
"#,
        )
        .unwrap();
        assert_eq!(detect_urgency(&lx, "outage someday"), Urgency::High);
        assert_eq!(detect_urgency(&lx, "fix it someday"), Urgency::Low);
        // no Medium tier configured
        assert_eq!(detect_urgency(&lx, "please fix it soon"), Urgency::Normal);
    }

    #[test]
    fn emotions_are_independent_flags() {
        let lx = Lexicon::default();
        let e = detect_emotions(&lx, "i am angry and let down but thanks anyway");
        assert_eq!(
            e.into_iter().collect::<Vec<_>>(),
            vec![Emotion::Anger, Emotion::Disappointment, Emotion::Gratitude]
        );
        assert!(detect_emotions(&lx, "").is_empty());
    }
}
