use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopledger_core::{ProductId, SaleId, lenient_f64};

/// Sale line: product reference, quantity, unit price snapshot.
///
/// `product_id` is a weak reference; the product may be gone by the time
/// anyone reads this line, in which case cost lookups fall back to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,
    /// Unit price captured at sale time.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
}

/// A recorded sale.
///
/// `total` is stored independently and is authoritative for revenue; items
/// are consulted only for cost-of-goods lookups. The two are not reconciled
/// against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    #[serde(default)]
    pub items: Vec<SaleItem>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: f64,
    pub date: DateTime<Utc>,
}

impl Sale {
    pub fn new(id: SaleId, items: Vec<SaleItem>, total: f64) -> Self {
        Self {
            id,
            items,
            total,
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_total_is_kept_verbatim() {
        // No recomputation from items: a total that disagrees with the
        // line items is still authoritative.
        let sale = Sale::new(
            SaleId::new(),
            vec![SaleItem {
                product_id: ProductId::new(),
                quantity: 1.0,
                price: 10.0,
            }],
            999.0,
        );
        assert_eq!(sale.total, 999.0);
    }

    #[test]
    fn sale_without_items_deserializes() {
        let raw = serde_json::json!({
            "id": SaleId::new(),
            "total": "12.50",
            "date": Utc::now(),
        });

        let sale: Sale = serde_json::from_value(raw).unwrap();
        assert!(sale.items.is_empty());
        assert_eq!(sale.total, 12.5);
    }
}
