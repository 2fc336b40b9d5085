//! `shopledger-storage` — the persistent store adapter.
//!
//! A generic durable key/value contract (named JSON blobs) plus the
//! tolerant `load_or`/`save` functions every entity store goes through.
//! Corruption, missing keys and shape mismatches all degrade to a
//! caller-supplied default; nothing in here propagates an error upward.

pub mod adapter;
pub mod backend;
pub mod json_file;
pub mod memory;

pub use adapter::{load_or, save};
pub use backend::{StorageBackend, StorageError};
pub use json_file::JsonFileBackend;
pub use memory::InMemoryBackend;
