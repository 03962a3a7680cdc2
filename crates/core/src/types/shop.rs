//! Payload types for the shop API.
//!
//! These mirror the JSON bodies served by the remote catalog and stock
//! endpoints. Neither is persisted by Cartkeeper; stock in particular is
//! only ever a point-in-time snapshot, authoritative at validation time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Product metadata from the catalog endpoint.
///
/// Fetched only when a product is added to the cart for the first time;
/// the initial quantity is always 1 regardless of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    /// Product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Decimal,
    /// Product image URL.
    pub image_url: String,
}

/// Available quantity for a product, from the stock endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Product ID.
    pub id: ProductId,
    /// Units currently available. Never negative.
    pub amount: i64,
}
