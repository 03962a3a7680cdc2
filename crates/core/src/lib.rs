//! Cartkeeper Core - Shared domain types.
//!
//! This crate provides the types shared across all Cartkeeper components:
//! - `manager` - Cart state, persistence, and stock validation
//! - `cli` - Command-line front-end driving the cart operations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no store access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, cart line items, and shop API payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
