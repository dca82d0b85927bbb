//! # Batch summary
//! Distribution counts, averages and modal values over many analysis results.
//!
//! Counts keep first-insertion order; the mode of each dimension is the first
//! entry holding the highest count. The fold is sequential in input order, so
//! ties break the same way for the same input.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::analyze::Sentiment;
use crate::engine::AnalysisResult;
use crate::lexicon::{Category, Emotion, Urgency};
use crate::sentiment::round_to;

/// Insertion-ordered counter. Serializes as a JSON object in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K> {
    entries: Vec<(K, usize)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> Tally<K> {
    /// Start with `keys` present at zero, fixing their order up front.
    pub fn seeded(keys: &[K]) -> Self {
        Self {
            entries: keys.iter().map(|&k| (k, 0)).collect(),
        }
    }

    pub fn add(&mut self, key: K) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => self.entries.push((key, 1)),
        }
    }

    pub fn get(&self, key: K) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, n)| n)
            .unwrap_or(0)
    }

    /// First key with the highest non-zero count.
    pub fn mode(&self) -> Option<K> {
        let mut best: Option<(K, usize)> = None;
        for &(k, n) in &self.entries {
            if n > 0 && best.map_or(true, |(_, top)| n > top) {
                best = Some((k, n));
            }
        }
        best.map(|(k, _)| k)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Serialize> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, n) in &self.entries {
            map.serialize_entry(k, n)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct BatchSummary {
    pub total_analyzed: usize,
    pub sentiment_distribution: Tally<Sentiment>,
    pub category_distribution: Tally<Category>,
    pub urgency_distribution: Tally<Urgency>,
    pub emotion_distribution: Tally<Emotion>,
    pub average_confidence: f64,
    pub average_word_count: f64,
    pub most_common_sentiment: Option<Sentiment>,
    pub most_common_category: Option<Category>,
    pub most_common_urgency: Option<Urgency>,
    pub most_common_emotion: Option<Emotion>,
}

/// Summarize `results`. An empty slice gives `BatchSummary::default()`.
pub fn summarize(results: &[AnalysisResult]) -> BatchSummary {
    if results.is_empty() {
        return BatchSummary::default();
    }

    let mut sentiments = Tally::seeded(&[
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
    ]);
    let mut categories = Tally::default();
    let mut urgency = Tally::default();
    let mut emotions = Tally::default();
    let mut confidence_sum = 0.0;
    let mut words_sum = 0usize;

    for r in results {
        sentiments.add(r.sentiment);
        categories.add(r.category);
        urgency.add(r.urgency);
        for &e in &r.emotions {
            emotions.add(e);
        }
        confidence_sum += r.confidence;
        words_sum += r.word_count;
    }

    let n = results.len() as f64;
    BatchSummary {
        total_analyzed: results.len(),
        most_common_sentiment: sentiments.mode(),
        most_common_category: categories.mode(),
        most_common_urgency: urgency.mode(),
        most_common_emotion: emotions.mode(),
        sentiment_distribution: sentiments,
        category_distribution: categories,
        urgency_distribution: urgency,
        emotion_distribution: emotions,
        average_confidence: round_to(confidence_sum / n, 3),
        average_word_count: round_to(words_sum as f64 / n, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_insertion_order_and_first_mode() {
        let mut t = Tally::default();
        t.add(Category::Service);
        t.add(Category::Billing);
        t.add(Category::Billing);
        t.add(Category::Service);
        assert_eq!(t.get(Category::Billing), 2);
        assert_eq!(t.get(Category::Product), 0);
        assert_eq!(t.mode(), Some(Category::Service));
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"Service":2,"Billing":2}"#
        );
    }

    #[test]
    fn seeded_tally_has_no_mode_until_counted() {
        let mut t = Tally::seeded(&[Sentiment::Positive, Sentiment::Neutral]);
        assert_eq!(t.mode(), None);
        t.add(Sentiment::Neutral);
        assert_eq!(t.mode(), Some(Sentiment::Neutral));
    }

    #[test]
    fn tally_serializes_as_ordered_object() {
        let mut t = Tally::default();
        t.add(Urgency::Low);
        t.add(Urgency::High);
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"Low":1,"High":1}"#
        );
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        let s = summarize(&[]);
        assert_eq!(s, BatchSummary::default());
        assert_eq!(s.total_analyzed, 0);
        assert_eq!(s.average_confidence, 0.0);
        assert!(s.sentiment_distribution.is_empty());
        assert_eq!(s.most_common_sentiment, None);
    }
}
