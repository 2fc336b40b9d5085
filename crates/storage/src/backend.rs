//! Durable key/value contract for serialized records.

use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Generic durable store of named JSON payloads.
///
/// Keys are flat names ("products", "sales", ...); a `write` fully replaces
/// whatever was stored under the key before. Implementations make no
/// attempt to interpret the payload.
pub trait StorageBackend: Send + Sync {
    /// Read the payload stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the payload stored under `key`.
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

impl<B> StorageBackend for Arc<B>
where
    B: StorageBackend + ?Sized,
{
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        (**self).write(key, payload)
    }
}
