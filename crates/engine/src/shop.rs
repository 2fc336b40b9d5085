//! The shop: five entity stores behind their sanctioned write paths.
//!
//! Mutation handlers are the only legal writes. Each store persists itself
//! through a subscription after every successful mutation; cross-entity
//! rules are deliberately not validated beyond the stock floor.

use std::sync::Arc;

use serde::Serialize;

use shopledger_core::ProductId;
use shopledger_domain::{Expense, Product, Sale, ShopSettings, StockOut};
use shopledger_storage::{StorageBackend, load_or, save};

use crate::metrics::{self, ShopMetrics, Snapshot};
use crate::seed;
use crate::store::EntityStore;

/// Storage keys of the five durable records.
pub mod keys {
    pub const PRODUCTS: &str = "products";
    pub const SALES: &str = "sales";
    pub const EXPENSES: &str = "expenses";
    pub const STOCK_OUTS: &str = "stockOuts";
    pub const SETTINGS: &str = "settings";
}

/// Outcome of [`Shop::record_stock_out`], surfaced for observability only.
///
/// The stored state never records the shortfall; callers that ignore this
/// value get the original clamp-silently behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockOutApplied {
    /// Requested quantity that was not actually in stock (clamped away).
    pub shortfall: f64,
    /// Whether a matching product existed to decrement.
    pub matched_product: bool,
}

/// The assembled state engine: one store per collection plus settings,
/// sharing a single storage backend.
///
/// Single-writer: all mutations are expected to come from one logical
/// actor, synchronously. Reads always see a fully-settled snapshot.
#[derive(Debug)]
pub struct Shop<B> {
    backend: Arc<B>,
    products: Arc<EntityStore<Vec<Product>>>,
    sales: Arc<EntityStore<Vec<Sale>>>,
    expenses: Arc<EntityStore<Vec<Expense>>>,
    stock_outs: Arc<EntityStore<Vec<StockOut>>>,
    settings: Arc<EntityStore<ShopSettings>>,
}

impl<B: StorageBackend + 'static> Shop<B> {
    /// Load every store from the backend (or its default) and wire
    /// persistence. Each collection is loaded exactly once; a missing or
    /// corrupt Products record degrades to the seed catalog, the other
    /// collections to empty, settings to its default.
    pub fn load(backend: B) -> Self {
        let backend = Arc::new(backend);

        let shop = Self {
            products: Arc::new(EntityStore::new(load_or(
                &*backend,
                keys::PRODUCTS,
                seed::products,
            ))),
            sales: Arc::new(EntityStore::new(load_or(&*backend, keys::SALES, Vec::new))),
            expenses: Arc::new(EntityStore::new(load_or(
                &*backend,
                keys::EXPENSES,
                Vec::new,
            ))),
            stock_outs: Arc::new(EntityStore::new(load_or(
                &*backend,
                keys::STOCK_OUTS,
                Vec::new,
            ))),
            settings: Arc::new(EntityStore::new(load_or(
                &*backend,
                keys::SETTINGS,
                ShopSettings::default,
            ))),
            backend,
        };

        persist_on_change(&shop.products, &shop.backend, keys::PRODUCTS);
        persist_on_change(&shop.sales, &shop.backend, keys::SALES);
        persist_on_change(&shop.expenses, &shop.backend, keys::EXPENSES);
        persist_on_change(&shop.stock_outs, &shop.backend, keys::STOCK_OUTS);
        persist_on_change(&shop.settings, &shop.backend, keys::SETTINGS);

        shop
    }

    /// Prepend a product to the catalog. Id uniqueness is the caller's
    /// responsibility.
    pub fn add_product(&self, product: Product) {
        self.products.update(|list| list.insert(0, product));
    }

    /// Replace the product with a matching id in place. Unknown ids are a
    /// no-op: nothing is written and nothing is persisted.
    pub fn update_product(&self, product: Product) {
        let exists = self.products.get().iter().any(|p| p.id == product.id);
        if !exists {
            return;
        }

        self.products.update(|list| {
            if let Some(slot) = list.iter_mut().find(|p| p.id == product.id) {
                *slot = product;
            }
        });
    }

    /// Remove the product with the given id. Historical Sales/StockOuts
    /// referencing it are untouched; their lookups degrade to zero.
    pub fn delete_product(&self, id: ProductId) {
        self.products.update(|list| list.retain(|p| p.id != id));
    }

    /// Append an expense.
    pub fn add_expense(&self, expense: Expense) {
        self.expenses.update(|list| list.push(expense));
    }

    /// Record a formal sale: decrement stock for each line item (clamped at
    /// zero, `last_updated` refreshed, missing products skipped), then
    /// prepend the sale. Never writes a StockOut record — that is what
    /// keeps the two revenue recording paths disjoint.
    pub fn add_sale(&self, sale: Sale) {
        self.products.update(|list| {
            for item in &sale.items {
                if let Some(p) = list.iter_mut().find(|p| p.id == item.product_id) {
                    let shortfall = p.remove_stock(item.quantity);
                    if shortfall > 0.0 {
                        tracing::warn!(
                            product_id = %item.product_id,
                            shortfall,
                            "sale exceeded available stock; clamped to zero"
                        );
                    }
                }
            }
        });

        self.sales.update(|list| list.insert(0, sale));
    }

    /// Record a stock-out: append it to the StockOuts collection and
    /// decrement the matching product's stock by the quantity, clamped at
    /// a floor of zero, refreshing its `last_updated`. Both updates happen
    /// within this one synchronous call. If no product matches, the
    /// stock-out is still recorded and no product changes. An
    /// over-decrement keeps the clamp; the shortfall is only returned and
    /// logged, never stored.
    pub fn record_stock_out(&self, stock_out: StockOut) -> StockOutApplied {
        let product_id = stock_out.product_id;
        let quantity = stock_out.quantity;

        let mut applied = StockOutApplied {
            shortfall: 0.0,
            matched_product: false,
        };

        self.stock_outs.update(|list| list.push(stock_out));
        self.products.update(|list| {
            if let Some(p) = list.iter_mut().find(|p| p.id == product_id) {
                applied.matched_product = true;
                applied.shortfall = p.remove_stock(quantity);
            }
        });

        if applied.shortfall > 0.0 {
            tracing::warn!(
                product_id = %product_id,
                shortfall = applied.shortfall,
                "stock-out exceeded available stock; clamped to zero"
            );
        }

        applied
    }

    /// Replace the settings record wholesale.
    pub fn update_settings(&self, settings: ShopSettings) {
        self.settings.set(settings);
    }

    // Read-only projections for the presentation layer.

    pub fn products(&self) -> Vec<Product> {
        self.products.get()
    }

    pub fn sales(&self) -> Vec<Sale> {
        self.sales.get()
    }

    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.get()
    }

    pub fn stock_outs(&self) -> Vec<StockOut> {
        self.stock_outs.get()
    }

    pub fn settings(&self) -> ShopSettings {
        self.settings.get()
    }

    /// Fully-settled view of the four collections.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            products: self.products.get(),
            sales: self.sales.get(),
            expenses: self.expenses.get(),
            stock_outs: self.stock_outs.get(),
        }
    }

    /// Current metrics, always a full recomputation over the snapshot.
    pub fn metrics(&self) -> ShopMetrics {
        metrics::compute(&self.snapshot())
    }
}

/// Wire persistence as a store observer: every successful mutation saves
/// only the store that changed.
fn persist_on_change<T, B>(store: &EntityStore<T>, backend: &Arc<B>, key: &'static str)
where
    T: Clone + Serialize + Send + Sync + 'static,
    B: StorageBackend + 'static,
{
    let backend = Arc::clone(backend);
    store.subscribe(move |value| save(&*backend, key, value));
}
