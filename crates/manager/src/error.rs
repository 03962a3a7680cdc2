//! Error taxonomy for cart mutations.

use cartkeeper_core::ProductId;
use thiserror::Error;

use crate::shop::ShopApiError;

/// Errors that can result from a cart mutation.
///
/// None of these are fatal: every variant means the operation was aborted
/// and the cart is exactly as it was before the call. `StockExceeded` is a
/// user-visible rejection rather than a failure; the other variants map to
/// collaborator errors or a caller-side bug.
#[derive(Debug, Error)]
pub enum CartError {
    /// The stock query failed (network, not-found, malformed response).
    #[error("stock lookup failed for product {product_id}: {source}")]
    StockUnavailable {
        product_id: ProductId,
        #[source]
        source: ShopApiError,
    },

    /// The catalog metadata fetch failed during a first-time add.
    #[error("catalog lookup failed for product {product_id}: {source}")]
    CatalogUnavailable {
        product_id: ProductId,
        #[source]
        source: ShopApiError,
    },

    /// The desired quantity exceeds the available stock. Soft rejection.
    #[error("requested {requested} of product {product_id} but only {available} in stock")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Removal was requested for a product that is not in the cart.
    /// Indicates a caller-side bug, recovered locally.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_exceeded_display() {
        let err = CartError::StockExceeded {
            product_id: ProductId::new(1),
            requested: 6,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "requested 6 of product 1 but only 5 in stock"
        );
    }

    #[test]
    fn test_not_in_cart_display() {
        let err = CartError::NotInCart(ProductId::new(9));
        assert_eq!(err.to_string(), "product 9 is not in the cart");
    }

    #[test]
    fn test_stock_unavailable_carries_source() {
        let err = CartError::StockUnavailable {
            product_id: ProductId::new(2),
            source: ShopApiError::Api {
                status: 503,
                message: "maintenance".to_string(),
            },
        };
        assert!(err.to_string().starts_with("stock lookup failed for product 2"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
