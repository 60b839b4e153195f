//! Local Filesystem Storage Adapter - Implementation of StateStorage.
//!
//! Keeps the whole key-value snapshot in a single JSON object file. Writes
//! are full-snapshot overwrites done with a write-to-temp-then-rename
//! pattern, so a crash mid-write leaves the previous snapshot intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::ports::{StateStorage, StorageError};

/// File-backed state storage.
///
/// # Atomic Writes
///
/// 1. Serialize the full key map to `state.json.tmp`
/// 2. Sync to disk
/// 3. Rename to `state.json`
///
/// # Failure Semantics
///
/// A missing or unreadable file loads as an empty map; corruption is
/// reported as `DecodeFailed` so the caller can fall back to defaults.
#[derive(Debug)]
pub struct FileStateStorage {
    path: PathBuf,
    // Guards read-modify-write cycles against re-entrant use.
    lock: Mutex<()>,
}

impl FileStateStorage {
    /// Creates a storage adapter writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| StorageError::DecodeFailed(format!("{}: {}", self.path.display(), e)))
    }

    /// Like `load_map`, but treats a corrupt snapshot as empty so the next
    /// full-snapshot overwrite replaces it. Reads keep reporting the
    /// corruption; only writes self-heal.
    fn load_map_or_recover(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.load_map() {
            Ok(map) => Ok(map),
            Err(StorageError::DecodeFailed(reason)) => {
                tracing::warn!(%reason, "replacing corrupt snapshot on next write");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }

    fn store_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::EncodeFailed(e.to_string()))?;

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content.as_bytes()).map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })
    }
}

impl StateStorage for FileStateStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.load_map()?.remove(key))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.load_map_or_recover()?;
        map.insert(key.to_string(), value.to_string());
        self.store_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.load_map_or_recover()?;
        if map.remove(key).is_some() {
            self.store_map(&map)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.store_map(&BTreeMap::new())
    }
}
