// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Named-slot key/value storage, the local equivalent of browser storage.
//!
//! Provides:
//! - `MemoryStorage` (in-process, used by tests and embedders)
//! - `FileStorage` (one JSON file per slot under a data directory)

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Synchronous string storage keyed by slot name.
pub trait Storage {
    /// Read a slot. `Ok(None)` means the slot was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Removing an absent slot is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot.
    pub fn with_item(mut self, key: &str, value: impl Into<String>) -> Self {
        self.items.insert(key.to_string(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// File-backed storage: slot `key` lives at `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::Io(format!("{}: {}", self.dir.display(), e)))?;

        // Write then rename so a crash never leaves a half-written slot
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StorageError::Io(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::Io(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("{}: {}", path.display(), e))),
        }
    }
}

/// Errors from storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Invalid slot name: {0}")]
    InvalidKey(String),

    #[error("Corrupt slot {key}: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Failed to serialize slot: {0}")]
    Serialize(String),
}
