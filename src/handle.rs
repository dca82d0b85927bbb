//! Shared, swappable engine for the HTTP layer.
//!
//! Requests clone the current `Arc<SentimentEngine>` and drop the lock before
//! analyzing; a reload swaps the whole engine in one write.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

use crate::debug::is_dev_env;
use crate::engine::SentimentEngine;
use crate::lexicon::Lexicon;

pub const ENV_HOT_RELOAD: &str = "LEXICON_HOT_RELOAD";

#[derive(Clone, Debug)]
pub struct EngineHandle {
    inner: Arc<RwLock<Arc<SentimentEngine>>>,
}

impl EngineHandle {
    pub fn new(engine: SentimentEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(engine))),
        }
    }

    /// Snapshot of the engine currently in use.
    pub fn current(&self) -> Arc<SentimentEngine> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, engine: SentimentEngine) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(engine);
    }

    /// Reload the lexicon (env path, default file, or built-in) and swap.
    /// On error the current engine stays in place.
    pub fn reload(&self) -> anyhow::Result<()> {
        let lexicon = Lexicon::load()?;
        self.replace(SentimentEngine::new(lexicon));
        info!(target: "lexicon", "engine reloaded");
        Ok(())
    }
}

/// Returns true if we should enable hot reload (dev/local only).
fn hot_reload_enabled() -> bool {
    let want = std::env::var(ENV_HOT_RELOAD)
        .map(|v| v == "1")
        .unwrap_or(false);
    want && is_dev_env()
}

/// What one poll of the lexicon file did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// File missing, first sighting, or mtime not advanced.
    Unchanged,
    Reloaded,
    /// mtime advanced but the file failed to load; the engine was kept.
    Skipped,
}

/// Tracks the lexicon file's mtime between polls.
#[derive(Debug)]
pub struct LexiconWatcher {
    path: PathBuf,
    last_mtime: Option<SystemTime>,
}

impl LexiconWatcher {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            last_mtime: None,
        }
    }

    /// Swap in a new engine if the file's mtime advanced since the last poll.
    /// An invalid file is logged and not retried until it changes again.
    pub fn poll(&mut self, handle: &EngineHandle) -> PollOutcome {
        let Ok(mtime) = fs::metadata(&self.path).and_then(|m| m.modified()) else {
            return PollOutcome::Unchanged;
        };
        let changed = self.last_mtime.is_some_and(|prev| mtime > prev);
        self.last_mtime = Some(mtime);
        if !changed {
            return PollOutcome::Unchanged;
        }

        match Lexicon::from_path(&self.path) {
            Ok(lexicon) => {
                handle.replace(SentimentEngine::new(lexicon));
                info!(target: "lexicon", path = %self.path.display(), "hot reloaded");
                PollOutcome::Reloaded
            }
            Err(e) => {
                warn!(target: "lexicon", error = %format!("{e:#}"), "hot reload skipped");
                PollOutcome::Skipped
            }
        }
    }
}

/// Poll `path` every 2s and swap in a new engine when its mtime advances.
pub fn start_hot_reload_thread(handle: EngineHandle, path: PathBuf) {
    if !hot_reload_enabled() {
        return;
    }

    thread::spawn(move || {
        let poll = Duration::from_secs(2);
        let mut watcher = LexiconWatcher::new(path);
        loop {
            watcher.poll(&handle);
            thread::sleep(poll);
        }
    });
}
