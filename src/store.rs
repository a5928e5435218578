//! State persistence
//!
//! The three-field [`TrendState`] record is persisted as a JSON document so
//! the keeper resumes where it left off after a restart. Writes go to a
//! temporary file first and are renamed into place, so a crash mid-write
//! never leaves a torn state file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::trend::TrendState;

/// JSON-file store for the tracker state
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, or `None` if no state has been saved yet.
    pub fn load(&self) -> anyhow::Result<Option<TrendState>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the state, replacing any previous snapshot.
    pub fn save(&self, state: &TrendState) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(state)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
