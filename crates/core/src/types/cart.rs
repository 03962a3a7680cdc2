//! Cart and line item types.
//!
//! A [`Cart`] is an ordered collection of [`LineItem`]s with at most one
//! line per product. Ordering is preserved for display purposes only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One product entry in the cart with its requested quantity.
///
/// Serialized with camelCase field names so the persisted form matches the
/// shop API payloads (`imageUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product ID (unique within the cart).
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Decimal,
    /// Product image URL.
    pub image_url: String,
    /// Requested quantity. Always >= 1 for a line that is in the cart.
    pub amount: i64,
}

/// An ordered collection of cart line items.
///
/// Invariant: at most one [`LineItem`] per [`ProductId`]. Insertion order is
/// preserved. Serde-transparent, so a cart serializes as a plain JSON array
/// of line items - exactly the blob kept in the durable store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// All line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Find the line item for a product.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Find the line item for a product, mutably.
    pub fn line_mut(&mut self, id: ProductId) -> Option<&mut LineItem> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Whether the cart holds a line for the given product.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    /// Append a line item.
    ///
    /// The caller is responsible for the uniqueness invariant: pushing a
    /// product that is already present is a logic error upstream.
    pub fn push(&mut self, item: LineItem) {
        debug_assert!(!self.contains(item.id), "duplicate line for {}", item.id);
        self.lines.push(item);
    }

    /// Remove the line for a product, returning it if present.
    ///
    /// Relative order of the remaining lines is unchanged.
    pub fn remove(&mut self, id: ProductId) -> Option<LineItem> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.amount).sum()
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(id: i64, amount: i64) -> LineItem {
        LineItem {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Decimal::new(1990, 2),
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            amount,
        }
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert!(!cart.contains(ProductId::new(1)));
    }

    #[test]
    fn test_push_and_lookup() {
        let mut cart = Cart::new();
        cart.push(item(1, 2));
        cart.push(item(2, 1));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().amount, 2);
        assert!(cart.line(ProductId::new(3)).is_none());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart: Cart = [item(1, 1), item(2, 1), item(3, 1)].into_iter().collect();

        let removed = cart.remove(ProductId::new(2)).unwrap();
        assert_eq!(removed.id, ProductId::new(2));

        let ids: Vec<i64> = cart.lines().iter().map(|line| line.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let mut cart: Cart = [item(1, 1)].into_iter().collect();
        assert!(cart.remove(ProductId::new(9)).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let cart: Cart = [item(1, 2)].into_iter().collect();
        let json = serde_json::to_value(&cart).unwrap();

        let lines = json.as_array().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[0]["amount"], 2);
        assert!(lines[0]["imageUrl"].is_string());
    }

    #[test]
    fn test_json_roundtrip() {
        let cart: Cart = [item(1, 2), item(2, 5)].into_iter().collect();
        let json = serde_json::to_vec(&cart).unwrap();
        let back: Cart = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, cart);
    }
}
