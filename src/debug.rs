//! Dev-only logging gates and log-safe text fingerprints.

use sha2::{Digest, Sha256};
use std::fmt::Write as _;

pub const ENV_DEV_LOG: &str = "SENTIMENT_DEV_LOG";

/// Debug build, or SHUTTLE_ENV in {local, development, dev}.
pub fn is_dev_env() -> bool {
    cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        )
}

/// SENTIMENT_DEV_LOG=1 AND a dev environment.
pub fn dev_logging_enabled() -> bool {
    std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1") && is_dev_env()
}

/// Short SHA-256 prefix identifying a complaint text in logs.
/// Raw complaint text is never logged.
pub fn anon_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
