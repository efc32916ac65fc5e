//! Local key-value persistence port.
//!
//! The cart and customer info live in per-browser local storage; this
//! trait is that storage's seam so the rest of the crate never touches a
//! concrete backend directly.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// Errors a storage backend may report.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key-value storage with last-write-wins semantics.
///
/// Every persisted value is rewritten in full on each save, so a second
/// writer can never leave a key partially updated.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory [`Storage`] backend.
///
/// The default for tests and for embedders that supply no durable store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("storage mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("storage mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("storage mutex poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("cart").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let storage = MemoryStorage::new();
        storage.set("cart", "[]").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("cart", "old").unwrap();
        storage.set("cart", "new").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_remove() {
        let storage = MemoryStorage::new();
        storage.set("cart", "[]").unwrap();
        storage.remove("cart").unwrap();
        assert_eq!(storage.get("cart").unwrap(), None);
    }
}
