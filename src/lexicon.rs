//! # Lexicon
//!
//! Immutable keyword data driving the engine: polarity words, intensifier
//! multipliers, negation markers, and the ordered category / urgency / emotion
//! keyword groups.
//!
//! - Built-in default via `Lexicon::default()`.
//! - Optional TOML file (`config/lexicon.toml`, or `$LEXICON_CONFIG_PATH`).
//! - Every loaded lexicon is validated before an engine can use it.
//!
//! Group order is significant: categories tie-break in declared order, so the
//! groups are kept in a `Vec`, never in a hash map.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_LEXICON_PATH: &str = "config/lexicon.toml";
pub const ENV_LEXICON_PATH: &str = "LEXICON_CONFIG_PATH";

/// Topical category of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Billing,
    Technical,
    Service,
    Product,
    General,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Billing => "Billing",
            Category::Technical => "Technical",
            Category::Service => "Service",
            Category::Product => "Product",
            Category::General => "General",
        }
    }
}

/// Response priority. `Normal` means no urgency keyword matched and is never
/// a lexicon tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
    Normal,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
            Urgency::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Frustration,
    Disappointment,
    Satisfaction,
    Gratitude,
}

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Frustration => "frustration",
            Emotion::Disappointment => "disappointment",
            Emotion::Satisfaction => "satisfaction",
            Emotion::Gratitude => "gratitude",
        }
    }
}

/// A tagged list of keywords or short phrases, matched as substrings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGroup<T> {
    pub tag: T,
    pub keywords: Vec<String>,
}

impl<T> KeywordGroup<T> {
    fn new(tag: T, keywords: &[&str]) -> Self {
        Self {
            tag,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    #[serde(default)]
    negations: HashSet<String>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
    #[serde(default)]
    categories: Vec<KeywordGroup<Category>>,
    #[serde(default)]
    urgency: Vec<KeywordGroup<Urgency>>,
    #[serde(default)]
    emotions: Vec<KeywordGroup<Emotion>>,
}

impl Lexicon {
    /// Resolve the lexicon path: `$LEXICON_CONFIG_PATH` or `config/lexicon.toml`.
    pub fn config_path() -> PathBuf {
        std::env::var(ENV_LEXICON_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEXICON_PATH))
    }

    /// Load using env var + fallbacks:
    /// 1) $LEXICON_CONFIG_PATH (must exist)
    /// 2) config/lexicon.toml
    /// 3) built-in default lexicon
    pub fn load() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_LEXICON_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                bail!(
                    "{} points to non-existent path {}",
                    ENV_LEXICON_PATH,
                    pb.display()
                );
            }
            return Self::from_path(&pb);
        }
        let default_p = PathBuf::from(DEFAULT_LEXICON_PATH);
        if default_p.exists() {
            return Self::from_path(&default_p);
        }
        info!(target: "lexicon", "no lexicon file found, using built-in lexicon");
        Ok(Self::default())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon from {}", path.display()))?;
        let lexicon = Self::from_toml_str(&content)
            .with_context(|| format!("parsing lexicon at {}", path.display()))?;
        info!(
            target: "lexicon",
            path = %path.display(),
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Parse and validate a TOML lexicon document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let lexicon: Lexicon = toml::from_str(s)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        for (kind, set) in [
            ("positive", &self.positive),
            ("negative", &self.negative),
            ("negation", &self.negations),
        ] {
            if let Some(w) = set.iter().find(|w| !is_token(w)) {
                bail!("{kind} word `{w}` must be a lowercase a-z token");
            }
        }
        if let Some(w) = self.positive.intersection(&self.negative).next() {
            bail!("word `{w}` is listed as both positive and negative");
        }
        for (w, &factor) in &self.intensifiers {
            if !is_token(w) {
                bail!("intensifier `{w}` must be a lowercase a-z token");
            }
            if !factor.is_finite() || factor <= 1.0 {
                bail!("intensifier `{w}` has factor {factor}, expected a finite value > 1.0");
            }
        }

        check_groups("category", &self.categories)?;
        check_groups("urgency", &self.urgency)?;
        check_groups("emotion", &self.emotions)?;
        if self.categories.iter().any(|g| g.tag == Category::General) {
            bail!("`General` is the no-match category and cannot have keywords");
        }
        if self.urgency.iter().any(|g| g.tag == Urgency::Normal) {
            bail!("`Normal` is the no-match urgency and cannot have keywords");
        }
        Ok(())
    }

    #[inline]
    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    #[inline]
    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    #[inline]
    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    #[inline]
    pub fn is_sentiment_word(&self, token: &str) -> bool {
        self.is_positive(token) || self.is_negative(token)
    }

    /// Multiplier for `token` when it precedes a sentiment word.
    #[inline]
    pub fn intensifier(&self, token: &str) -> Option<f64> {
        self.intensifiers.get(token).copied()
    }

    pub fn categories(&self) -> &[KeywordGroup<Category>] {
        &self.categories
    }

    pub fn urgency_tiers(&self) -> &[KeywordGroup<Urgency>] {
        &self.urgency
    }

    pub fn emotions(&self) -> &[KeywordGroup<Emotion>] {
        &self.emotions
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            positive: self.positive.len(),
            negative: self.negative.len(),
            negations: self.negations.len(),
            intensifiers: self.intensifiers.len(),
            categories: self.categories.iter().map(|g| g.tag).collect(),
            urgency: self.urgency.iter().map(|g| g.tag).collect(),
            emotions: self.emotions.iter().map(|g| g.tag).collect(),
        }
    }
}

/// Sizes and group orders, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexiconStats {
    pub positive: usize,
    pub negative: usize,
    pub negations: usize,
    pub intensifiers: usize,
    pub categories: Vec<Category>,
    pub urgency: Vec<Urgency>,
    pub emotions: Vec<Emotion>,
}

fn is_token(w: &str) -> bool {
    !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase())
}

/// Keywords are matched against processed text, which only holds `[a-z]`
/// words joined by single spaces.
fn is_phrase(k: &str) -> bool {
    k.split(' ').all(is_token)
}

fn check_groups<T: PartialEq + std::fmt::Debug>(
    kind: &str,
    groups: &[KeywordGroup<T>],
) -> Result<()> {
    for (i, g) in groups.iter().enumerate() {
        if groups[..i].iter().any(|prev| prev.tag == g.tag) {
            bail!("duplicate {kind} group {:?}", g.tag);
        }
        for k in &g.keywords {
            if k.trim().is_empty() {
                return Err(anyhow!("{kind} group {:?} has an empty keyword", g.tag));
            }
            if !is_phrase(k) {
                bail!("{kind} keyword `{k}` must be lowercase a-z words separated by single spaces");
            }
        }
    }
    Ok(())
}

fn words(list: &[&str]) -> HashSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        let positive = words(&[
            "good", "great", "excellent", "amazing", "wonderful", "fantastic", "perfect", "love",
            "like", "happy", "satisfied", "pleased", "thank", "thanks", "appreciate", "helpful",
            "friendly", "quick", "fast", "efficient", "professional", "courteous", "polite",
            "outstanding", "superb", "brilliant", "awesome", "incredible", "marvelous",
            "exceptional", "remarkable", "impressive", "delighted", "thrilled", "grateful",
            "blessed", "fortunate", "lucky", "smooth", "seamless", "flawless", "reliable",
            "trustworthy", "recommended",
        ]);
        let negative = words(&[
            "bad", "terrible", "awful", "horrible", "disgusting", "hate", "angry", "frustrated",
            "disappointed", "unsatisfied", "poor", "slow", "rude", "unprofessional", "useless",
            "broken", "failed", "error", "problem", "issue", "complaint", "wrong", "worst",
            "never", "cancel", "refund", "money", "waste", "scam", "pathetic", "ridiculous",
            "unacceptable", "outrageous", "shocking", "appalling", "dreadful", "atrocious",
            "abysmal", "deplorable", "inadequate", "insufficient", "defective", "faulty",
            "damaged", "unreliable", "untrustworthy", "dishonest", "fraudulent", "misleading",
        ]);
        let negations = words(&[
            "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor", "none",
            "cannot", "cant", "wont", "dont",
        ]);
        let intensifiers = [
            ("very", 1.5),
            ("extremely", 2.0),
            ("really", 1.3),
            ("quite", 1.2),
            ("absolutely", 1.8),
            ("completely", 1.7),
            ("totally", 1.6),
        ]
        .into_iter()
        .map(|(w, f)| (w.to_string(), f))
        .collect();

        let categories = vec![
            KeywordGroup::new(
                Category::Billing,
                &[
                    "bill", "billing", "charge", "payment", "money", "cost", "price", "fee",
                    "invoice", "refund", "credit", "debit",
                ],
            ),
            KeywordGroup::new(
                Category::Technical,
                &[
                    "internet", "connection", "wifi", "network", "speed", "slow", "outage",
                    "down", "technical", "equipment", "modem", "router",
                ],
            ),
            KeywordGroup::new(
                Category::Service,
                &[
                    "service", "customer", "support", "help", "representative", "agent", "call",
                    "phone", "wait", "hold", "response",
                ],
            ),
            KeywordGroup::new(
                Category::Product,
                &[
                    "product", "feature", "channel", "tv", "cable", "package", "plan",
                    "subscription", "upgrade", "downgrade",
                ],
            ),
        ];

        let urgency = vec![
            KeywordGroup::new(
                Urgency::High,
                &["urgent", "emergency", "immediately", "asap", "critical", "serious", "help"],
            ),
            KeywordGroup::new(
                Urgency::Medium,
                &["soon", "quickly", "fast", "resolve", "fix", "please"],
            ),
            KeywordGroup::new(Urgency::Low, &["when", "possible", "convenient", "eventually"]),
        ];

        let emotions = vec![
            KeywordGroup::new(
                Emotion::Anger,
                &["angry", "furious", "mad", "rage", "outraged", "livid"],
            ),
            KeywordGroup::new(
                Emotion::Frustration,
                &["frustrated", "annoyed", "irritated", "bothered"],
            ),
            KeywordGroup::new(
                Emotion::Disappointment,
                &["disappointed", "let down", "expected better"],
            ),
            KeywordGroup::new(
                Emotion::Satisfaction,
                &["satisfied", "pleased", "content", "happy"],
            ),
            KeywordGroup::new(
                Emotion::Gratitude,
                &["thank", "grateful", "appreciate", "thanks"],
            ),
        ];

        Self {
            positive,
            negative,
            negations,
            intensifiers,
            categories,
            urgency,
            emotions,
        }
    }
}
