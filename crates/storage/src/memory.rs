//! In-memory backend for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::backend::{StorageBackend, StorageError};

/// In-memory key/value backend.
///
/// Intended for tests/dev. Not durable across process restarts.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload directly, bypassing serialization. Useful for
    /// corruption scenarios in tests.
    pub fn seed_raw(&self, key: &str, payload: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key.to_string(), payload.to_string());
        }
    }
}

impl StorageBackend for InMemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        map.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
