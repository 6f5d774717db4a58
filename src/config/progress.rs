//! Reading-position persistence
//!
//! The reading position is the sole durable state. The shell owns a
//! [`ProgressStore`] trait object so the core and its tests never touch
//! the real filesystem; absence or corruption of the file is "no saved
//! progress", never an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Config;

/// Where the reader left off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPosition {
    /// Chapter number, 1-based
    pub chapter: usize,

    /// Line index within the chapter, 0-based; clamped by the engine on
    /// load in case the chapter has since shrunk
    pub line: usize,

    /// Unix timestamp of the save
    #[serde(default)]
    pub saved_at: i64,
}

impl ReadingPosition {
    /// Position stamped with the current time
    pub fn new(chapter: usize, line: usize) -> Self {
        let saved_at = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64);
        Self { chapter, line, saved_at }
    }
}

/// Storage port for the reading position
pub trait ProgressStore {
    /// Load the saved position; absence and corruption both read as `None`
    fn load(&self) -> Option<ReadingPosition>;

    /// Persist the position; failures are absorbed, progress is not critical
    fn save(&self, position: ReadingPosition);

    /// Remove any saved position
    fn clear(&self);
}

/// JSON-file store under the platform data directory
pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    /// Store at the default location (`progress.json` in the data dir)
    pub fn open_default() -> Result<Self> {
        Ok(Self { path: Config::data_dir()?.join("progress.json") })
    }

    /// Store at an explicit path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn try_save(&self, position: &ReadingPosition) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(position)
            .with_context(|| "Failed to serialize progress")?;

        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write progress to {:?}", self.path))?;

        Ok(())
    }
}

impl ProgressStore for JsonProgressStore {
    fn load(&self) -> Option<ReadingPosition> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!("No saved progress at {:?}: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(position) => Some(position),
            Err(e) => {
                tracing::debug!("Discarding malformed progress file {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&self, position: ReadingPosition) {
        if let Err(e) = self.try_save(&position) {
            tracing::debug!("Failed to save progress: {:#}", e);
        }
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::debug!("Failed to clear progress: {}", e);
            }
        }
    }
}
