//! Tolerant load/save between typed values and the backend.
//!
//! The contract every entity store relies on: `load_or` never fails (any
//! problem degrades to the caller's default) and `save` never surfaces a
//! failure into the mutation path that triggered it.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::StorageBackend;

/// Load the value stored under `key`, falling back to `default` on any
/// failure: missing key, unreadable backend, malformed JSON, or a payload
/// whose shape does not match `T` (e.g. a non-array under a collection
/// key). Failures are logged and swallowed.
pub fn load_or<T, B, F>(backend: &B, key: &str, default: F) -> T
where
    T: DeserializeOwned,
    B: StorageBackend + ?Sized,
    F: FnOnce() -> T,
{
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "no stored value, using default");
            return default();
        }
        Err(err) => {
            tracing::error!(key, error = %err, "failed to read stored value, using default");
            return default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(key, error = %err, "stored value is corrupt, using default");
            default()
        }
    }
}

/// Serialize `value` and write it under `key`, fully replacing the
/// previous payload. Fire-and-forget: failures are logged only.
pub fn save<T, B>(backend: &B, key: &str, value: &T)
where
    T: Serialize,
    B: StorageBackend + ?Sized,
{
    let payload = match serde_json::to_string(value) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to serialize value, skipping save");
            return;
        }
    };

    if let Err(err) = backend.write(key, &payload) {
        tracing::error!(key, error = %err, "failed to persist value");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryBackend;

    fn seed_list() -> Vec<String> {
        vec!["seed-a".to_string(), "seed-b".to_string()]
    }

    #[test]
    fn missing_key_yields_default() {
        let backend = InMemoryBackend::new();
        let loaded: Vec<String> = load_or(&backend, "products", seed_list);
        assert_eq!(loaded, seed_list());
    }

    #[test]
    fn malformed_json_yields_default() {
        let backend = InMemoryBackend::new();
        backend.seed_raw("products", "{{{{not json");
        let loaded: Vec<String> = load_or(&backend, "products", seed_list);
        assert_eq!(loaded, seed_list());
    }

    #[test]
    fn wrong_shape_yields_default() {
        // A non-array payload under a collection key counts as corruption.
        let backend = InMemoryBackend::new();
        backend.seed_raw("products", "{\"oops\": true}");
        let loaded: Vec<String> = load_or(&backend, "products", seed_list);
        assert_eq!(loaded, seed_list());
    }

    #[test]
    fn save_then_load_round_trips() {
        let backend = InMemoryBackend::new();
        let original = vec![1.5f64, 0.0, 42.0];
        save(&backend, "expenses", &original);
        let loaded: Vec<f64> = load_or(&backend, "expenses", Vec::new);
        assert_eq!(loaded, original);
    }

    #[test]
    fn save_fully_replaces_previous_value() {
        let backend = InMemoryBackend::new();
        save(&backend, "sales", &vec![1, 2, 3]);
        save(&backend, "sales", &vec![9]);
        let loaded: Vec<i32> = load_or(&backend, "sales", Vec::new);
        assert_eq!(loaded, vec![9]);
    }
}
