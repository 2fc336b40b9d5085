use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use shopledger_core::{ProductId, StockOutId, lenient_f64};

/// Why inventory left stock outside the formal sale flow.
///
/// `Sale` is the only semantically special value: those stock-outs count as
/// revenue events. The rest of the set is open; unrecognized reasons
/// deserialize to `Other` and are treated as plain (non-sale) removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockOutReason {
    Sale,
    Damage,
    Loss,
    Adjustment,
    Other,
}

impl StockOutReason {
    pub fn is_sale(self) -> bool {
        matches!(self, StockOutReason::Sale)
    }
}

impl<'de> Deserialize<'de> for StockOutReason {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Sale" => Self::Sale,
            "Damage" => Self::Damage,
            "Loss" => Self::Loss,
            "Adjustment" => Self::Adjustment,
            _ => Self::Other,
        })
    }
}

/// A recorded inventory decrement.
///
/// `product_id` is a weak reference into the catalog; a missing product
/// degrades to zero price/cost at every computation site, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockOut {
    pub id: StockOutId,
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,
    pub reason: StockOutReason,
    pub date: DateTime<Utc>,
}

impl StockOut {
    pub fn new(id: StockOutId, product_id: ProductId, quantity: f64, reason: StockOutReason) -> Self {
        Self {
            id,
            product_id,
            quantity,
            reason,
            date: Utc::now(),
        }
    }
}
