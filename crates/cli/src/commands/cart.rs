//! Cart commands.
//!
//! Each command builds a fresh [`CartManager`] from the environment, runs
//! one mutation (or none, for `show`), and prints the resulting snapshot.
//! The cart survives between invocations through the file store, so the
//! CLI behaves like any other cart consumer: read the snapshot, invoke an
//! operation, surface the notices.

use std::sync::Arc;

use cartkeeper_core::{Cart, ProductId};
use cartkeeper_manager::notify::{Notice, Notifier, Severity};
use cartkeeper_manager::shop::ShopApiError;
use cartkeeper_manager::store::FileStore;
use cartkeeper_manager::{CartConfig, CartError, CartManager, ConfigError, ShopApiClient};
use thiserror::Error;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CartCliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The shop API client could not be built.
    #[error(transparent)]
    Client(#[from] ShopApiError),

    /// The cart operation was rejected or failed.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Notifier that prints notices to the terminal.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    #[allow(clippy::print_stderr)] // notices are user-facing terminal output
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Warning => eprintln!("warning: {}", notice.message),
            Severity::Error => eprintln!("error: {}", notice.message),
        }
    }
}

/// Show the current cart.
pub async fn show() -> Result<(), CartCliError> {
    let manager = load_manager().await?;
    render(&manager.snapshot());
    Ok(())
}

/// Add one unit of a product.
pub async fn add(product_id: ProductId) -> Result<(), CartCliError> {
    let mut manager = load_manager().await?;
    manager.add_product(product_id).await?;
    render(&manager.snapshot());
    Ok(())
}

/// Remove a product.
pub async fn remove(product_id: ProductId) -> Result<(), CartCliError> {
    let mut manager = load_manager().await?;
    manager.remove_product(product_id).await?;
    render(&manager.snapshot());
    Ok(())
}

/// Set a product's quantity.
pub async fn update(product_id: ProductId, amount: i64) -> Result<(), CartCliError> {
    let mut manager = load_manager().await?;
    manager.update_product_amount(product_id, amount).await?;
    render(&manager.snapshot());
    Ok(())
}

/// Wire configuration, file store, and shop API client into a manager.
async fn load_manager() -> Result<CartManager, CartCliError> {
    let config = CartConfig::from_env()?;
    let shop = Arc::new(ShopApiClient::new(&config)?);

    Ok(CartManager::load(
        Arc::new(FileStore::new(config.store_dir.clone())),
        shop.clone(),
        shop,
        Arc::new(ConsoleNotifier),
    )
    .await)
}

/// Print a cart snapshot, one line per item.
#[allow(clippy::print_stdout)] // the cart listing is the command's output
fn render(cart: &Cart) {
    if cart.is_empty() {
        println!("(cart is empty)");
        return;
    }

    for line in cart.lines() {
        println!(
            "{:>4} x {} (id {}) @ {}",
            line.amount, line.title, line.id, line.price
        );
    }
    println!("total items: {}", cart.total_quantity());
}
