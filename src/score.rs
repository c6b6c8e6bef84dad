//! Best-score tracking and the stores that keep it between sessions.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Somewhere the best score survives a restart.
pub trait ScoreStore {
    /// The stored best score, or `None` if nothing has been stored yet.
    fn get(&self) -> Result<Option<u64>, String>;

    fn set(&mut self, value: u64) -> Result<(), String>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self) -> Result<Option<u64>, String> {
        (**self).get()
    }

    fn set(&mut self, value: u64) -> Result<(), String> {
        (**self).set(value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<u64>,
}

impl MemoryStore {
    pub fn new(value: Option<u64>) -> Self {
        Self { value }
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self) -> Result<Option<u64>, String> {
        Ok(self.value)
    }

    fn set(&mut self, value: u64) -> Result<(), String> {
        self.value = Some(value);
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct BestRecord {
    best: u64,
}

/// JSON file holding `{"best": N}`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub const DEFAULT_PATH: &'static str = "best2048.json";

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(PathBuf::from(Self::DEFAULT_PATH))
    }
}

impl ScoreStore for FileStore {
    fn get(&self) -> Result<Option<u64>, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(format!("Failed to read {}: {}", self.path.display(), e)),
        };

        let record: BestRecord = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse {}: {}", self.path.display(), e))?;

        Ok(Some(record.best))
    }

    fn set(&mut self, value: u64) -> Result<(), String> {
        let raw = serde_json::to_string(&BestRecord { best: value })
            .map_err(|e| format!("Failed to encode best score: {}", e))?;

        fs::write(&self.path, raw)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }
}

/// Keeps the best score in step with the running score.
pub struct Scoreboard<S: ScoreStore> {
    store: S,
    best: u64,
}

impl<S: ScoreStore> Scoreboard<S> {
    /// Loads the stored best. An unreadable store counts as 0.
    pub fn new(store: S) -> Self {
        let best = match store.get() {
            Ok(best) => best.unwrap_or(0),
            Err(e) => {
                warn!("Ignoring stored best score: {}", e);
                0
            }
        };

        info!("Best score: {}", best);

        Self { store, best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Raises the best score to `score` if it is higher, returning whether it
    /// was. A failed write only costs persistence for this session.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }

        self.best = score;

        if let Err(e) = self.store.set(score) {
            warn!("Best score not saved: {}", e);
        }

        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
