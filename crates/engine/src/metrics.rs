//! Pure derivation of aggregate business metrics.
//!
//! Revenue and profit merge two independent recording paths: formal Sale
//! transactions and `Sale`-reason stock-outs. The two are disjoint by
//! construction of the mutation handlers (a stock-out is never also
//! represented as a Sale for the same event), so summing both never double
//! counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use shopledger_core::ProductId;
use shopledger_domain::{Expense, Product, Sale, StockOut};

/// Point-in-time view of the four collections the metrics derive from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub expenses: Vec<Expense>,
    pub stock_outs: Vec<StockOut>,
}

/// Aggregate business metrics, recomputed in full from a snapshot.
///
/// Serialized field names are the external contract consumed by the
/// presentation layer and the insights collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopMetrics {
    pub total_revenue: f64,
    pub total_profit: f64,
    /// Transaction count: formal sales plus `Sale`-reason stock-outs.
    pub total_sales: u64,
    pub total_expenses: f64,
    pub low_stock_count: u64,
}

/// Lookup-or-default accessor for weak product references.
///
/// Dangling references (a sale or stock-out pointing at a deleted product)
/// degrade to zero price/cost; they are an expected condition, not an error.
struct ProductIndex<'a> {
    by_id: HashMap<ProductId, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    fn of(products: &'a [Product]) -> Self {
        Self {
            by_id: products.iter().map(|p| (p.id, p)).collect(),
        }
    }

    fn price(&self, id: ProductId) -> f64 {
        self.by_id.get(&id).map(|p| p.price).unwrap_or(0.0)
    }

    fn cost(&self, id: ProductId) -> f64 {
        self.by_id.get(&id).map(|p| p.cost).unwrap_or(0.0)
    }
}

/// Compute the metrics for a snapshot.
///
/// Pure and deterministic: no side effects, identical output for an
/// unchanged snapshot. Always a full recomputation, never incremental.
pub fn compute(snapshot: &Snapshot) -> ShopMetrics {
    let index = ProductIndex::of(&snapshot.products);

    let direct_revenue: f64 = snapshot.sales.iter().map(|s| s.total).sum();

    let sale_outs = || {
        snapshot
            .stock_outs
            .iter()
            .filter(|s| s.reason.is_sale())
    };

    let stock_out_revenue: f64 = sale_outs()
        .map(|s| s.quantity * index.price(s.product_id))
        .sum();

    // Stored totals are authoritative for revenue; items only feed the
    // cost-of-goods side of profit.
    let sales_profit: f64 = snapshot
        .sales
        .iter()
        .map(|sale| {
            let cost_of_goods: f64 = sale
                .items
                .iter()
                .map(|item| index.cost(item.product_id) * item.quantity)
                .sum();
            sale.total - cost_of_goods
        })
        .sum();

    let stock_out_profit: f64 = sale_outs()
        .map(|s| (index.price(s.product_id) - index.cost(s.product_id)) * s.quantity)
        .sum();

    let total_expenses: f64 = snapshot.expenses.iter().map(|e| e.amount).sum();

    ShopMetrics {
        total_revenue: direct_revenue + stock_out_revenue,
        total_profit: sales_profit + stock_out_profit - total_expenses,
        total_sales: (snapshot.sales.len() + sale_outs().count()) as u64,
        total_expenses,
        low_stock_count: snapshot
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .count() as u64,
    }
}
