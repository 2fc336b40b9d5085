use serde_json::json;

use shopledger_domain::{Product, Sale};
use shopledger_engine::ShopMetrics;

use crate::job::InsightJob;
use crate::report::{InsightError, InsightReport};

/// Read-only input handed to the insights boundary: the computed metrics
/// plus the raw Products and Sales collections.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopSnapshotInput {
    pub metrics: ShopMetrics,
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
}

/// Deterministic business digest over a shop snapshot.
///
/// Stands in for (and feeds) the external model: it turns the snapshot
/// into the text the presentation layer shows in the insights panel.
#[derive(Debug, Clone)]
pub struct ShopDigestJob {
    input: ShopSnapshotInput,
    /// How many low-stock product names to call out by name.
    highlight_limit: usize,
}

impl ShopDigestJob {
    pub fn new(input: ShopSnapshotInput) -> Self {
        Self {
            input,
            highlight_limit: 5,
        }
    }

    pub fn with_highlight_limit(mut self, highlight_limit: usize) -> Self {
        self.highlight_limit = highlight_limit;
        self
    }
}

impl InsightJob for ShopDigestJob {
    type Input = ShopSnapshotInput;

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<InsightReport, InsightError> {
        let m = &self.input.metrics;

        if !(m.total_revenue.is_finite() && m.total_profit.is_finite() && m.total_expenses.is_finite()) {
            return Err(InsightError::InvalidInput(
                "metrics contain non-finite figures".to_string(),
            ));
        }

        let low_stock: Vec<&Product> = self
            .input
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .collect();

        let headline = format!(
            "{} transaction(s), {:.2} revenue, {:.2} profit",
            m.total_sales, m.total_revenue, m.total_profit
        );

        let mut body = format!(
            "Revenue {:.2} against {:.2} in expenses leaves {:.2} profit across {} transaction(s).",
            m.total_revenue, m.total_expenses, m.total_profit, m.total_sales
        );

        if low_stock.is_empty() {
            body.push_str(" Stock levels are healthy.");
        } else {
            let names: Vec<&str> = low_stock
                .iter()
                .take(self.highlight_limit)
                .map(|p| p.name.as_str())
                .collect();
            body.push_str(&format!(
                " {} product(s) are at or below their minimum stock: {}.",
                low_stock.len(),
                names.join(", ")
            ));
        }

        Ok(InsightReport::new(headline, body).with_metadata(json!({
            "kind": "shop.digest",
            "totalRevenue": m.total_revenue,
            "totalProfit": m.total_profit,
            "totalExpenses": m.total_expenses,
            "totalSales": m.total_sales,
            "lowStockCount": m.low_stock_count,
            "saleCount": self.input.sales.len(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopledger_core::ProductId;
    use shopledger_engine::metrics::{self, Snapshot};

    fn product(name: &str, stock: f64, min_stock: f64) -> Product {
        let mut p = Product::new(ProductId::new(), name);
        p.price = 10.0;
        p.cost = 4.0;
        p.stock = stock;
        p.min_stock = min_stock;
        p
    }

    fn input_for(products: Vec<Product>) -> ShopSnapshotInput {
        let snapshot = Snapshot {
            products: products.clone(),
            ..Snapshot::default()
        };
        ShopSnapshotInput {
            metrics: metrics::compute(&snapshot),
            products,
            sales: vec![],
        }
    }

    #[test]
    fn digest_is_deterministic() {
        let job = ShopDigestJob::new(input_for(vec![product("Soap", 2.0, 5.0)]));
        let first = job.run().unwrap();
        let second = job.run().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn digest_names_low_stock_products() {
        let job = ShopDigestJob::new(input_for(vec![
            product("Soap", 2.0, 5.0),
            product("Rice", 50.0, 5.0),
        ]));

        let report = job.run().unwrap();
        assert!(report.body.contains("Soap"));
        assert!(!report.body.contains("Rice"));
    }

    #[test]
    fn digest_respects_the_highlight_limit() {
        let products: Vec<Product> = (0..10)
            .map(|i| product(&format!("Item {i}"), 0.0, 5.0))
            .collect();
        let job = ShopDigestJob::new(input_for(products)).with_highlight_limit(3);

        let report = job.run().unwrap();
        assert!(report.body.contains("Item 2"));
        assert!(!report.body.contains("Item 3,"));
        assert!(report.body.contains("10 product(s)"));
    }

    #[test]
    fn digest_rejects_non_finite_metrics() {
        let mut input = input_for(vec![]);
        input.metrics.total_revenue = f64::NAN;

        let err = ShopDigestJob::new(input).run().unwrap_err();
        match err {
            InsightError::InvalidInput(_) => {}
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
