//! Cartkeeper Manager - cart state, stock validation, and persistence.
//!
//! This crate owns the only non-trivial logic in Cartkeeper: the cart
//! state-transition machine. A [`CartManager`] holds the in-memory
//! [`Cart`](cartkeeper_core::Cart), validates every quantity change against
//! a live stock service, and writes each committed state through a durable
//! key-value store so it survives process restarts.
//!
//! # Architecture
//!
//! The manager is an explicitly-owned state object with injected
//! collaborators, all behind trait objects:
//!
//! - [`store::DurableStore`] - whole-blob key-value persistence
//!   ([`store::FileStore`] for real runs, [`store::MemoryStore`] for tests)
//! - [`shop::StockOracle`] / [`shop::CatalogService`] - the remote shop API
//!   ([`shop::ShopApiClient`] implements both over HTTP)
//! - [`notify::Notifier`] - user-facing messages, decoupled from state logic
//!
//! Mutations take `&mut self`: callers serialize access, the manager holds
//! no internal locks. Every failure path returns a typed [`CartError`] and
//! emits a notice; none of them disturbs the committed cart.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cartkeeper_manager::{CartConfig, CartManager, ShopApiClient};
//! use cartkeeper_manager::notify::TracingNotifier;
//! use cartkeeper_manager::store::FileStore;
//!
//! let config = CartConfig::from_env()?;
//! let shop = Arc::new(ShopApiClient::new(&config)?);
//! let mut manager = CartManager::load(
//!     Arc::new(FileStore::new(&config.store_dir)),
//!     shop.clone(),
//!     shop,
//!     Arc::new(TracingNotifier),
//! )
//! .await;
//!
//! manager.add_product(1.into()).await?;
//! println!("{} lines", manager.snapshot().len());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod manager;
pub mod notify;
pub mod shop;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::CartError;
pub use manager::{CART_STORE_KEY, CartManager};
pub use shop::ShopApiClient;
