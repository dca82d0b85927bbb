// tests/lexicon_config.rs
// Lexicon loading: shipped config file, env override, fallbacks, validation.

use std::{env, fs};

use churn_sentiment::lexicon::{Lexicon, ENV_LEXICON_PATH};
use churn_sentiment::{Sentiment, SentimentEngine};
use serial_test::serial;

const CUSTOM_TOML: &str = r#"
positive = ["stellar"]
negative = ["meh"]
negations = ["hardly"]

[intensifiers]
super = 3.0

[[categories]]
tag = "Product"
keywords = ["gadget"]
"#;

#[serial]
#[test]
fn shipped_config_matches_builtin_lexicon() {
    let from_file = Lexicon::from_path("config/lexicon.toml".as_ref()).expect("config parses");
    assert_eq!(from_file, Lexicon::default());
}

#[serial]
#[test]
fn env_path_takes_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, CUSTOM_TOML).unwrap();

    env::set_var(ENV_LEXICON_PATH, &path);
    let loaded = Lexicon::load();
    env::remove_var(ENV_LEXICON_PATH);

    let lx = loaded.expect("custom lexicon loads");
    assert!(lx.is_positive("stellar"));
    assert!(!lx.is_positive("good"));

    let engine = SentimentEngine::new(lx);
    let r = engine.analyze("hardly super stellar gadget").unwrap();
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert_eq!(r.category, churn_sentiment::Category::Product);
}

#[serial]
#[test]
fn missing_env_path_is_an_error() {
    env::set_var(ENV_LEXICON_PATH, "definitely/not/here.toml");
    let res = Lexicon::load();
    env::remove_var(ENV_LEXICON_PATH);
    let err = res.unwrap_err();
    assert!(err.to_string().contains(ENV_LEXICON_PATH), "{err}");
}

#[serial]
#[test]
fn falls_back_to_builtin_without_any_file() {
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_LEXICON_PATH);

    let res = Lexicon::load();

    env::set_current_dir(&old).unwrap();
    assert_eq!(res.unwrap(), Lexicon::default());
}

#[serial]
#[test]
fn invalid_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "positive = [\"Good\"]\nnegative = []\n").unwrap();

    env::set_var(ENV_LEXICON_PATH, &path);
    let res = Lexicon::load();
    env::remove_var(ENV_LEXICON_PATH);

    let msg = format!("{:#}", res.unwrap_err());
    assert!(msg.contains("bad.toml"), "{msg}");
    assert!(msg.contains("Good"), "{msg}");
}
