//! File-per-key JSON backend.
//!
//! Each key maps to `<root>/<key>.json`; the default root lives under the
//! OS app-data directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;

use crate::backend::{StorageBackend, StorageError};

/// Durable backend storing one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    root: PathBuf,
}

impl JsonFileBackend {
    /// Backend rooted at the default OS data directory.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self { root: data_dir()? })
    }

    /// Backend rooted at an explicit directory (tests, portable installs).
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.key_path(key), payload)?;
        Ok(())
    }
}

/// Resolve the default data directory: `{app_data_dir}/shopledger`.
fn data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    let mut dir = base;
    dir.push("shopledger");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_backend() -> JsonFileBackend {
        let root = std::env::temp_dir()
            .join("shopledger-tests")
            .join(uuid::Uuid::now_v7().to_string());
        JsonFileBackend::with_root(root)
    }

    #[test]
    fn read_of_missing_file_is_none() {
        let backend = temp_backend();
        assert!(backend.read("products").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let backend = temp_backend();
        backend.write("products", "[1,2,3]").unwrap();
        assert_eq!(backend.read("products").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn write_replaces_previous_payload() {
        let backend = temp_backend();
        backend.write("settings", "{}").unwrap();
        backend.write("settings", "{\"returnPolicy\":{}}").unwrap();
        assert_eq!(
            backend.read("settings").unwrap().as_deref(),
            Some("{\"returnPolicy\":{}}")
        );
    }
}
