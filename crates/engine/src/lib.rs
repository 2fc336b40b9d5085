//! `shopledger-engine` — entity stores, mutation handlers and the metrics
//! engine.
//!
//! The [`Shop`] is the single writer: its handlers are the only sanctioned
//! write paths into the five stores. Every successful mutation notifies the
//! store's observers synchronously (persistence is one of them), and
//! metrics are recomputed from the full snapshot on every read.

pub mod metrics;
pub mod seed;
pub mod shop;
pub mod store;

pub use metrics::{ShopMetrics, Snapshot};
pub use shop::{Shop, StockOutApplied};
pub use store::EntityStore;
