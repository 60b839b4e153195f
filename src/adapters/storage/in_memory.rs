//! In-memory state storage for testing.
//!
//! Deterministic, dependency-free backing for unit and integration tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ports::{StateStorage, StorageError};

/// In-memory key-value store.
///
/// Also usable as a fault injector: flip `fail_writes` to make every
/// mutation return an error, exercising the engine's degrade-to-defaults
/// path.
#[derive(Debug, Default)]
pub struct InMemoryStateStorage {
    values: RwLock<HashMap<String, String>>,
    fail_writes: RwLock<bool>,
}

impl InMemoryStateStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the given key-value pairs.
    pub fn seeded<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
            fail_writes: RwLock::new(false),
        }
    }

    /// Makes all subsequent writes fail (for failure-path tests).
    pub fn set_fail_writes(&self, fail: bool) {
        *self
            .fail_writes
            .write()
            .unwrap_or_else(|e| e.into_inner()) = fail;
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if *self.fail_writes.read().unwrap_or_else(|e| e.into_inner()) {
            Err(StorageError::io("write failure injected"))
        } else {
            Ok(())
        }
    }
}

impl StateStorage for InMemoryStateStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .values
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.check_writable()?;
        self.values
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_roundtrips() {
        let storage = InMemoryStateStorage::new();
        storage.put("draftResponse", "hello").unwrap();
        assert_eq!(storage.get("draftResponse").unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn seeded_store_has_initial_values() {
        let storage = InMemoryStateStorage::seeded([("corePromptIndex", "2")]);
        assert_eq!(storage.get("corePromptIndex").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn injected_failure_blocks_writes_but_not_reads() {
        let storage = InMemoryStateStorage::new();
        storage.put("a", "1").unwrap();
        storage.set_fail_writes(true);
        assert!(storage.put("a", "2").is_err());
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
    }
}
