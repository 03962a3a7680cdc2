//! Integration test support for Cartkeeper.
//!
//! Shared test doubles for the scenario tests in `tests/`:
//!
//! - [`FakeShop`] - in-memory stock oracle + catalog service with
//!   switchable outages and adjustable stock levels
//! - [`RecordingNotifier`] - captures every notice for assertions
//!
//! The doubles live in the library crate (rather than each test file) so
//! scenarios across files exercise identical collaborator behavior.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use cartkeeper_core::{CatalogProduct, ProductId, StockLevel};
use cartkeeper_manager::notify::{Notice, Notifier};
use cartkeeper_manager::shop::{CatalogService, ShopApiError, StockOracle};
use rust_decimal::Decimal;

/// Shop API fake serving both traits from in-memory tables.
pub struct FakeShop {
    stock: Mutex<HashMap<ProductId, i64>>,
    products: HashMap<ProductId, CatalogProduct>,
    stock_down: AtomicBool,
    catalog_down: AtomicBool,
}

impl FakeShop {
    /// Seed products with the given `(id, stock)` pairs. Catalog metadata
    /// is derived from the id.
    #[must_use]
    pub fn seeded(levels: &[(i64, i64)]) -> Self {
        let mut stock = HashMap::new();
        let mut products = HashMap::new();
        for &(id, amount) in levels {
            let product_id = ProductId::new(id);
            stock.insert(product_id, amount);
            products.insert(
                product_id,
                CatalogProduct {
                    id: product_id,
                    title: format!("Product {id}"),
                    price: Decimal::new(9990, 2),
                    image_url: format!("https://cdn.example.com/{id}.jpg"),
                },
            );
        }
        Self {
            stock: Mutex::new(stock),
            products,
            stock_down: AtomicBool::new(false),
            catalog_down: AtomicBool::new(false),
        }
    }

    /// Adjust a product's stock level mid-test.
    pub fn set_stock(&self, product_id: ProductId, amount: i64) {
        let mut stock = self.stock.lock().unwrap_or_else(PoisonError::into_inner);
        stock.insert(product_id, amount);
    }

    /// Make every stock query fail until turned back off.
    pub fn set_stock_down(&self, down: bool) {
        self.stock_down.store(down, Ordering::SeqCst);
    }

    /// Make every catalog query fail until turned back off.
    pub fn set_catalog_down(&self, down: bool) {
        self.catalog_down.store(down, Ordering::SeqCst);
    }

    fn outage() -> ShopApiError {
        ShopApiError::Api {
            status: 503,
            message: "maintenance".to_string(),
        }
    }
}

#[async_trait]
impl StockOracle for FakeShop {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, ShopApiError> {
        if self.stock_down.load(Ordering::SeqCst) {
            return Err(Self::outage());
        }
        let stock = self.stock.lock().unwrap_or_else(PoisonError::into_inner);
        stock
            .get(&product_id)
            .map(|&amount| StockLevel {
                id: product_id,
                amount,
            })
            .ok_or(ShopApiError::NotFound(product_id))
    }
}

#[async_trait]
impl CatalogService for FakeShop {
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, ShopApiError> {
        if self.catalog_down.load(Ordering::SeqCst) {
            return Err(Self::outage());
        }
        self.products
            .get(&product_id)
            .cloned()
            .ok_or(ShopApiError::NotFound(product_id))
    }
}

/// Notifier that records every notice for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices emitted so far, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
