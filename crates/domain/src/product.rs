use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopledger_core::{ProductId, lenient_f64};

/// Catalog product.
///
/// Numeric fields coerce to zero when absent or malformed so one broken
/// record never rejects the whole collection. Stock is clamped at a floor
/// of zero by every mutation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit sale price.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    /// Unit acquisition cost.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cost: f64,
    /// Current stock quantity. Never negative.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stock: f64,
    /// Threshold at or below which the product counts as low-stock.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub min_stock: f64,
    pub last_updated: DateTime<Utc>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price: 0.0,
            cost: 0.0,
            stock: 0.0,
            min_stock: 0.0,
            last_updated: Utc::now(),
        }
    }

    /// Low-stock when stock is at or below the threshold (boundary inclusive).
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Remove up to `quantity` units, clamping stock at zero, and refresh
    /// `last_updated`. Returns the shortfall (how much of the requested
    /// quantity was not actually in stock; zero when fully covered).
    pub fn remove_stock(&mut self, quantity: f64) -> f64 {
        let available = self.stock.max(0.0);
        let taken = quantity.min(available);
        self.stock = (available - taken).max(0.0);
        self.last_updated = Utc::now();
        (quantity - taken).max(0.0)
    }
}
