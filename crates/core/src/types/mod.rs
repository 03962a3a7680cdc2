//! Core types for Cartkeeper.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod shop;

pub use cart::{Cart, LineItem};
pub use id::*;
pub use shop::{CatalogProduct, StockLevel};
