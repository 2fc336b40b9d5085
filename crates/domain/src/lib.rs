//! `shopledger-domain` — the shop's record types.
//!
//! Five independent top-level shapes: Product, Sale, Expense, StockOut and
//! the single ShopSettings record. Cross-collection links are weak
//! references (plain identifier fields); history stays immutable even when
//! the referenced product later vanishes.

pub mod expense;
pub mod product;
pub mod sale;
pub mod settings;
pub mod stock_out;

pub use expense::Expense;
pub use product::Product;
pub use sale::{Sale, SaleItem};
pub use settings::{ReturnPolicy, ShopSettings};
pub use stock_out::{StockOut, StockOutReason};
