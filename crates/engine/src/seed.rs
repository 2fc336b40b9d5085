//! Starter catalog.
//!
//! Used as the Products load default: a missing or corrupt Products record
//! degrades to this list instead of an empty shop.

use shopledger_core::ProductId;
use shopledger_domain::Product;

fn item(name: &str, price: f64, cost: f64, stock: f64, min_stock: f64) -> Product {
    let mut p = Product::new(ProductId::new(), name);
    p.price = price;
    p.cost = cost;
    p.stock = stock;
    p.min_stock = min_stock;
    p
}

/// Hard-coded initial product list.
pub fn products() -> Vec<Product> {
    vec![
        item("Bottled Water 500ml", 1.5, 0.6, 48.0, 12.0),
        item("Instant Noodles", 0.9, 0.5, 60.0, 20.0),
        item("AA Batteries (4-pack)", 4.5, 2.75, 24.0, 8.0),
        item("Laundry Soap Bar", 1.2, 0.7, 36.0, 10.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_products_are_well_formed() {
        let seeded = products();
        assert!(!seeded.is_empty());
        for p in &seeded {
            assert!(!p.name.is_empty());
            assert!(p.price > 0.0);
            assert!(p.cost > 0.0);
            assert!(p.stock >= 0.0);
            assert!(!p.is_low_stock());
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let seeded = products();
        let mut ids: Vec<_> = seeded.iter().map(|p| p.id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), seeded.len());
    }
}
