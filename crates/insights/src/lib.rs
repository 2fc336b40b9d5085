//! `shopledger-insights`
//!
//! **Responsibility:** the read-only insights boundary.
//!
//! This crate is intentionally **not** part of the state engine:
//! - It only ever receives cloned snapshots (metrics plus the raw Products
//!   and Sales collections).
//! - It must not mutate shop state; there is no write path from here.
//! - It emits **insight reports** (freeform text plus metadata), the same
//!   contract an external model would fulfill.

pub mod job;
pub mod report;
pub mod shop_digest;

pub use job::InsightJob;
pub use report::{InsightError, InsightReport};
pub use shop_digest::{ShopDigestJob, ShopSnapshotInput};
