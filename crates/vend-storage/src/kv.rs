//! The key-value backend contract and the in-memory backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::StorageError;

/// A durable, best-effort key-value store.
///
/// Values are opaque strings; callers serialize their own state. Backends
/// make no atomicity promises across keys, and callers are expected to treat
/// a failed read as "no prior state" rather than an error worth surfacing.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, or `None` if the key is absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is not an
    /// error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process backend over a mutex-guarded map.
///
/// The default backend for tests and for sessions that do not need state to
/// survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("memory store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("memory store lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
