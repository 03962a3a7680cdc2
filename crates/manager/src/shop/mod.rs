//! Shop API clients: stock oracle and product catalog.
//!
//! # Architecture
//!
//! The cart core only needs two questions answered: "how many units of
//! product X are available right now?" and "what is product X?". Each is a
//! trait with a single method, one attempt per call - retries, if desired,
//! are an adapter concern and invisible to the cart.
//!
//! [`ShopApiClient`] implements both traits against the remote shop API
//! over plain JSON REST:
//!
//! - `GET {base}/stock/{id}` -> `{ "id": 1, "amount": 5 }`
//! - `GET {base}/products/{id}` -> `{ "id": 1, "title": ..., "price": ...,
//!   "imageUrl": ... }`
//!
//! Stock responses are never cached: every mutation re-validates against
//! live stock, because stock is an external, possibly-changing resource.

mod client;

pub use client::ShopApiClient;

use async_trait::async_trait;
use cartkeeper_core::{CatalogProduct, ProductId, StockLevel};
use thiserror::Error;

/// Errors that can occur when interacting with the shop API.
#[derive(Debug, Error)]
pub enum ShopApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Product not known to the shop API.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Source of live stock levels, authoritative at validation time.
#[async_trait]
pub trait StockOracle: Send + Sync {
    /// Current available quantity for a product.
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, ShopApiError>;
}

/// Source of product metadata, consulted on first-time adds only.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Full product metadata for a product.
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, ShopApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ShopApiError::NotFound(ProductId::new(123));
        assert_eq!(err.to_string(), "Product not found: 123");
    }

    #[test]
    fn test_api_error_display() {
        let err = ShopApiError::Api {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - maintenance");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ShopApiError::Parse("expected number".to_string());
        assert_eq!(err.to_string(), "Parse error: expected number");
    }
}
