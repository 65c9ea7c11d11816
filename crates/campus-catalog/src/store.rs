//! String key-value storage abstraction.
//!
//! The production backend is the browser's localStorage (out of scope);
//! this trait mirrors its shape so catalog state can be exercised against
//! the in-memory backend.

use std::collections::HashMap;
use std::sync::Mutex;

/// Errors from the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The trait that all storage backends implement.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under a key.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value under a key, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("key", "value".to_string()).unwrap();
        assert_eq!(store.get("key").unwrap(), Some("value".to_string()));

        store.set("key", "replaced".to_string()).unwrap();
        assert_eq!(store.get("key").unwrap(), Some("replaced".to_string()));

        store.remove("key").unwrap();
        assert!(store.get("key").unwrap().is_none());
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("never-set").is_ok());
    }
}
