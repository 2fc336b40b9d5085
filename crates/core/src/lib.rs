//! `shopledger-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod num;

pub use error::{DomainError, DomainResult};
pub use id::{ExpenseId, ProductId, SaleId, StockOutId};
pub use num::{lenient_f64, safe_f64};
