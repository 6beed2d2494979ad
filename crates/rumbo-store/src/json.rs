//! JSON-file persistence.
//!
//! The directory layout mirrors the original web version's two
//! localStorage keys: `session.json` for in-progress state and
//! `completed.json` for the latest finished assessment.

use std::path::{Path, PathBuf};

use rumbo_core::error::StoreError;
use rumbo_core::traits::{CompletionRecord, ProgressStore, SessionState};

const SESSION_FILE: &str = "session.json";
const COMPLETED_FILE: &str = "completed.json";

/// Stores progress as pretty-printed JSON files under one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn completed_path(&self) -> PathBuf {
        self.dir.join(COMPLETED_FILE)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Option<T>, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }
}

impl ProgressStore for JsonFileStore {
    fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        tracing::debug!(dir = %self.dir.display(), "saving session state");
        self.write_json(&self.session_path(), state)
    }

    fn load(&self) -> Result<Option<SessionState>, StoreError> {
        self.read_json(&self.session_path())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.session_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn record_completion(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        tracing::info!(id = %record.id, "recording completed assessment");
        self.write_json(&self.completed_path(), record)
    }

    fn load_completion(&self) -> Result<Option<CompletionRecord>, StoreError> {
        self.read_json(&self.completed_path())
    }
}
