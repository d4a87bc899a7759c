//! File-backed record store.
//!
//! Two records live under fixed keys in one directory, one JSON file each.
//! Reads happen once at startup; every write replaces the whole file via a
//! temp file and rename, so a crash never leaves a half-written record.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chartxo_core::{ScanHistoryEntry, UserProfile};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

pub const PROFILE_KEY: &str = "snapchart_user_profile";
pub const HISTORY_KEY: &str = "scan_history";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Use `dir` for records. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the record cannot be decoded, or
    /// [`StoreError::Io`] if it cannot be read.
    pub fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.read(PROFILE_KEY)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Serde`] on write failure.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.write(PROFILE_KEY, profile)
    }

    /// Missing history is an empty list.
    ///
    /// # Errors
    ///
    /// See [`Self::load_profile`].
    pub fn load_history(&self) -> Result<Vec<ScanHistoryEntry>, StoreError> {
        Ok(self.read(HISTORY_KEY)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// See [`Self::save_profile`].
    pub fn save_history(&self, history: &[ScanHistoryEntry]) -> Result<(), StoreError> {
        self.write(HISTORY_KEY, history)
    }

    /// Remove a record. Removing a missing record is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                path,
                reason: e.to_string(),
            })
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        let json = serde_json::to_string(value)?;
        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "record saved");
        Ok(())
    }
}
