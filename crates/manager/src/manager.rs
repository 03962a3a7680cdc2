//! Cart state transitions: add, remove, update quantity.
//!
//! [`CartManager`] is the single mutation authority for the cart. Every
//! operation follows the same shape: clone the current cart into a working
//! copy, validate the candidate change against live stock, then commit by
//! atomically replacing the owned cart and writing it through the durable
//! store. Any failure discards the working copy, so from the caller's
//! perspective each operation is all-or-nothing.

use std::sync::Arc;

use cartkeeper_core::{Cart, LineItem, ProductId};
use tracing::{debug, error, instrument, warn};

use crate::error::CartError;
use crate::notify::{Notice, Notifier};
use crate::shop::{CatalogService, StockOracle};
use crate::store::DurableStore;

/// Fixed key under which the serialized cart is persisted.
pub const CART_STORE_KEY: &str = "cartkeeper:cart";

const ADD_FAILED_MSG: &str = "Could not add the product to the cart";
const REMOVE_FAILED_MSG: &str = "Could not remove the product from the cart";
const UPDATE_FAILED_MSG: &str = "Could not update the product quantity";
const OUT_OF_STOCK_MSG: &str = "Requested quantity is out of stock";

/// Owner of the in-memory cart and its mutation operations.
///
/// Mutations take `&mut self`; callers are expected to serialize access
/// (single-flight queue, UI-level disabling of re-entrant actions). The
/// manager holds no internal locks and defines no cancellation semantics -
/// an in-flight operation runs to completion.
pub struct CartManager {
    cart: Cart,
    store: Arc<dyn DurableStore>,
    stock: Arc<dyn StockOracle>,
    catalog: Arc<dyn CatalogService>,
    notifier: Arc<dyn Notifier>,
}

impl CartManager {
    /// Load the cart from the durable store under [`CART_STORE_KEY`].
    ///
    /// Never fails: a missing blob starts an empty cart, and a malformed
    /// blob degrades to an empty cart with a warning log.
    pub async fn load(
        store: Arc<dyn DurableStore>,
        stock: Arc<dyn StockOracle>,
        catalog: Arc<dyn CatalogService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = match store.read(CART_STORE_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(cart) => cart,
                Err(parse_error) => {
                    warn!(%parse_error, "persisted cart is malformed, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(store_error) => {
                warn!(%store_error, "could not read persisted cart, starting empty");
                Cart::new()
            }
        };

        Self {
            cart,
            store,
            stock,
            catalog,
            notifier,
        }
    }

    /// Read-only snapshot of the current cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.cart.clone()
    }

    /// Add one unit of a product to the cart.
    ///
    /// An existing line is merged (`amount + 1`); a new product is looked up
    /// in the catalog and appended with `amount = 1`. The desired quantity
    /// is validated against live stock before anything is committed.
    ///
    /// # Errors
    ///
    /// - [`CartError::StockUnavailable`] - the stock query failed
    /// - [`CartError::StockExceeded`] - one more unit would exceed stock
    /// - [`CartError::CatalogUnavailable`] - first-time add and the
    ///   metadata fetch failed
    ///
    /// On every error path the cart is untouched and a notice is emitted.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let mut working = self.cart.clone();

        let stock = match self.stock.stock_level(product_id).await {
            Ok(level) => level,
            Err(source) => {
                self.notifier.notify(Notice::error(ADD_FAILED_MSG));
                return Err(CartError::StockUnavailable { product_id, source });
            }
        };

        let current = working.line(product_id).map_or(0, |line| line.amount);
        let desired = current + 1;

        if desired > stock.amount {
            self.notifier.notify(Notice::warning(OUT_OF_STOCK_MSG));
            return Err(CartError::StockExceeded {
                product_id,
                requested: desired,
                available: stock.amount,
            });
        }

        if let Some(line) = working.line_mut(product_id) {
            line.amount = desired;
        } else {
            let product = match self.catalog.product(product_id).await {
                Ok(product) => product,
                Err(source) => {
                    self.notifier.notify(Notice::error(ADD_FAILED_MSG));
                    return Err(CartError::CatalogUnavailable { product_id, source });
                }
            };

            working.push(LineItem {
                id: product.id,
                title: product.title,
                price: product.price,
                image_url: product.image_url,
                amount: 1,
            });
        }

        self.commit(working).await;
        Ok(())
    }

    /// Remove a product's line from the cart.
    ///
    /// No stock validation: removal never violates stock constraints.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if the product has no line. The UI
    /// should never request that; it is a caller-side bug, recovered
    /// locally with a notice and no state change.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        if !self.cart.contains(product_id) {
            self.notifier.notify(Notice::error(REMOVE_FAILED_MSG));
            return Err(CartError::NotInCart(product_id));
        }

        let mut working = self.cart.clone();
        working.remove(product_id);

        self.commit(working).await;
        Ok(())
    }

    /// Set a product's quantity to an absolute amount.
    ///
    /// A non-positive `amount` is silently ignored - it defends against a
    /// decrement-below-one triggered by a UI control and is not an error.
    /// A product that is not in the cart is also a silent no-op; this is
    /// deliberately asymmetric with [`Self::remove_product`], matching
    /// long-standing caller expectations.
    ///
    /// # Errors
    ///
    /// - [`CartError::StockUnavailable`] - the stock query failed
    /// - [`CartError::StockExceeded`] - `amount` exceeds available stock
    #[instrument(skip(self), fields(product_id = %product_id, amount))]
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        if amount <= 0 {
            debug!("ignoring non-positive quantity update");
            return Ok(());
        }

        let stock = match self.stock.stock_level(product_id).await {
            Ok(level) => level,
            Err(source) => {
                self.notifier.notify(Notice::error(UPDATE_FAILED_MSG));
                return Err(CartError::StockUnavailable { product_id, source });
            }
        };

        if amount > stock.amount {
            self.notifier.notify(Notice::warning(OUT_OF_STOCK_MSG));
            return Err(CartError::StockExceeded {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut working = self.cart.clone();
        if let Some(line) = working.line_mut(product_id) {
            line.amount = amount;
        }

        self.commit(working).await;
        Ok(())
    }

    /// Replace the owned cart and write it through the durable store.
    ///
    /// The in-memory replace is the commit point. A persistence failure is
    /// reported to the operator log but does not roll the commit back; the
    /// store contract is whole-blob replace, so the next successful write
    /// re-converges.
    async fn commit(&mut self, next: Cart) {
        self.cart = next;

        match serde_json::to_vec(&self.cart) {
            Ok(bytes) => {
                if let Err(store_error) = self.store.write(CART_STORE_KEY, &bytes).await {
                    error!(%store_error, key = CART_STORE_KEY, "failed to persist cart");
                }
            }
            Err(serialize_error) => {
                error!(%serialize_error, "failed to serialize cart");
            }
        }
    }
}
