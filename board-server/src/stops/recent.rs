//! Persistence for the most recently viewed stop.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::error::StoreError;

/// Default store file, relative to the working directory.
const DEFAULT_PATH: &str = "last_stop.json";

/// On-disk record for the last stop.
#[derive(Debug, Serialize, Deserialize)]
struct SavedStop {
    /// Unix timestamp when the stop was saved.
    saved_at_secs: u64,
    stop_id: String,
}

/// Stores the last submitted stop id so restarts reload the same board.
#[derive(Debug, Clone)]
pub struct RecentStopStore {
    path: PathBuf,
}

impl RecentStopStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the saved stop id.
    ///
    /// Returns `None` if the file is missing or unreadable; a corrupt
    /// store never blocks startup.
    pub fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let saved: SavedStop = serde_json::from_str(&contents).ok()?;
        Some(saved.stop_id)
    }

    /// Save a stop id, replacing any previous one.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, stop_id: &str) -> Result<(), StoreError> {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| StoreError::Clock)?
            .as_secs();

        let saved = SavedStop {
            saved_at_secs: now,
            stop_id: stop_id.to_string(),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&saved)?;
        std::fs::write(&self.path, json)?;

        Ok(())
    }

    /// The store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for RecentStopStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}
