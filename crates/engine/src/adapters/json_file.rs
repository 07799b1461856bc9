//! JSON file save store
//!
//! One pretty-printed JSON file per slot. Writes go through a sibling temp
//! file and a rename so a crash mid-write cannot leave a truncated record
//! behind; loads of a missing file are `None`, not an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use crate::ports::{SaveRecord, SaveStoreError, SaveStorePort};

/// File-backed single-slot save store
#[derive(Debug, Clone)]
pub struct JsonFileSaveStore {
    path: PathBuf,
}

impl JsonFileSaveStore {
    /// Store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for a named slot under the platform data directory
    /// (e.g. `~/.local/share/riftbound/<slot>.json` on Linux)
    pub fn for_slot(slot: &str) -> Result<Self> {
        let dirs = ProjectDirs::from("com", "riftbound", "riftbound")
            .context("no home directory available for save files")?;
        Ok(Self::new(dirs.data_dir().join(format!("{slot}.json"))))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStorePort for JsonFileSaveStore {
    fn save(&mut self, record: &SaveRecord) -> Result<(), SaveStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_vec_pretty(record)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &encoded)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "save record written");
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveRecord>, SaveStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record = serde_json::from_str(&raw)?;
        Ok(Some(record))
    }

    fn clear(&mut self) -> Result<(), SaveStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
