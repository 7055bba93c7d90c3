//! High score table
//!
//! Persisted to a JSON file, tracks the fewest attempts per difficulty.
//! Loading tolerates a missing or corrupt file; saving is best-effort and
//! atomic (temp file + rename). A temp file orphaned by an interrupted save
//! is removed on the next load. There is no file locking: a single process
//! is assumed to own the file.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::difficulty::Difficulty;

/// Persistence failure, logged and then collapsed to `false`
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("highscore file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("highscore table could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Best attempt count per difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScores {
    best: [Option<u32>; Difficulty::ALL.len()],
}

impl HighScores {
    /// Create a table with no records
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, difficulty: Difficulty) -> Option<u32> {
        self.best[difficulty.index()]
    }

    /// Record lookup by display name; unknown names have no record
    pub fn get_by_name(&self, name: &str) -> Option<u32> {
        Difficulty::from_name(name).and_then(|d| self.get(d))
    }

    /// Check if `attempts` would set a new record
    pub fn qualifies(&self, difficulty: Difficulty, attempts: u32) -> bool {
        self.get(difficulty).is_none_or(|best| attempts < best)
    }

    /// Record `attempts` if it beats the current best.
    /// Returns true if a new record was set.
    pub fn record(&mut self, difficulty: Difficulty, attempts: u32) -> bool {
        assert!(attempts > 0, "attempt count must be positive");
        if !self.qualifies(difficulty, attempts) {
            return false;
        }
        self.best[difficulty.index()] = Some(attempts);
        true
    }

    /// Check if no difficulty has a record
    pub fn is_empty(&self) -> bool {
        self.best.iter().all(Option::is_none)
    }

    /// (difficulty, best) pairs in menu order
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, Option<u32>)> + '_ {
        Difficulty::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Build a table from decoded JSON, keeping only valid entries
    pub fn from_json(value: &Value) -> Self {
        let mut scores = Self::new();
        let Some(object) = value.as_object() else {
            log::info!("Highscore file is not a JSON object, ignoring it");
            return scores;
        };
        for difficulty in Difficulty::ALL {
            let entry = object.get(difficulty.name());
            let best = entry
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .filter(|&n| n > 0);
            if best.is_none() && entry.is_some_and(|v| !v.is_null()) {
                log::info!("Ignoring invalid {} highscore: {}", difficulty, entry.unwrap_or(&Value::Null));
            }
            scores.best[difficulty.index()] = best;
        }
        scores
    }
}

impl Serialize for HighScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.best.len()))?;
        for (difficulty, best) in self.iter() {
            map.serialize_entry(difficulty.name(), &best)?;
        }
        map.end()
    }
}

/// File-backed highscore storage
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load high scores. Never fails: missing, unreadable or corrupt data
    /// leaves the affected entries without a record.
    pub fn load(&self) -> HighScores {
        self.clear_stale_tmp();
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                return HighScores::new();
            }
            Err(e) => {
                log::info!("Could not read {}: {}", self.path.display(), e);
                return HighScores::new();
            }
        };

        match serde_json::from_str::<Value>(&json) {
            Ok(value) => {
                let scores = HighScores::from_json(&value);
                log::info!(
                    "Loaded {} high scores",
                    scores.iter().filter(|(_, best)| best.is_some()).count()
                );
                scores
            }
            Err(e) => {
                log::info!("Highscore file {} is corrupt: {}", self.path.display(), e);
                HighScores::new()
            }
        }
    }

    /// Save high scores. Returns false if the write failed.
    pub fn save(&self, scores: &HighScores) -> bool {
        match self.try_save(scores) {
            Ok(()) => {
                log::info!("High scores saved to {}", self.path.display());
                true
            }
            Err(e) => {
                log::info!("Skipping highscore save: {}", e);
                false
            }
        }
    }

    /// Write to a sibling temp file, then rename it over the target
    fn try_save(&self, scores: &HighScores) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(scores)?;
        let tmp_path = self.tmp_path();
        let written = File::create(&tmp_path).and_then(|mut tmp| {
            tmp.write_all(json.as_bytes())?;
            tmp.write_all(b"\n")?;
            tmp.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, &self.path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    /// `.<file name>.tmp-`, shared by every temp file of this store
    fn tmp_prefix(&self) -> String {
        let base = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("highscores.json");
        format!(".{}.tmp-", base)
    }

    fn tmp_path(&self) -> PathBuf {
        self.path
            .with_file_name(format!("{}{}", self.tmp_prefix(), std::process::id()))
    }

    /// Remove temp files left behind by a save that never reached its rename
    fn clear_stale_tmp(&self) {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        let prefix = self.tmp_prefix();
        for entry in entries.flatten() {
            let is_stale = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(&prefix));
            if is_stale && entry.file_type().is_ok_and(|t| t.is_file()) {
                log::info!("Removing stale temp file {}", entry.path().display());
                let _ = fs::remove_file(entry.path());
            }
        }
    }

    /// Record `attempts` and persist if it is a new record.
    /// Returns true if a new record was set, even if the save failed.
    pub fn update(&self, scores: &mut HighScores, difficulty: Difficulty, attempts: u32) -> bool {
        if !scores.record(difficulty, attempts) {
            return false;
        }
        self.save(scores);
        true
    }

    /// Same as `update`, keyed by display name. Unknown names are ignored.
    pub fn update_by_name(&self, scores: &mut HighScores, name: &str, attempts: u32) -> bool {
        match Difficulty::from_name(name) {
            Some(difficulty) => self.update(scores, difficulty, attempts),
            None => {
                log::info!("Unknown difficulty {:?}, highscore not recorded", name);
                false
            }
        }
    }

    /// Delete the highscore file. A missing file counts as success.
    pub fn reset(&self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("High scores reset");
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => {
                log::info!("Could not delete {}: {}", self.path.display(), e);
                false
            }
        }
    }
}
