//! Cartkeeper CLI - drive the cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! cartkeeper show
//!
//! # Add one unit of product 1
//! cartkeeper add 1
//!
//! # Set product 1's quantity to 3
//! cartkeeper update 1 3
//!
//! # Remove product 1
//! cartkeeper remove 1
//! ```
//!
//! # Environment Variables
//!
//! - `CART_API_BASE_URL` - Base URL of the shop API (required)
//! - `CART_STORE_DIR` - Directory for the durable cart store
//! - `CART_HTTP_TIMEOUT_SECS` - Shop API request timeout

#![cfg_attr(not(test), forbid(unsafe_code))]

use cartkeeper_core::ProductId;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cartkeeper")]
#[command(author, version, about = "Cartkeeper CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current cart
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product ID
        product_id: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: i64,
    },
    /// Set a product's quantity
    Update {
        /// Product ID
        product_id: i64,
        /// New quantity (non-positive values are ignored)
        amount: i64,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::cart::CartCliError> {
    match cli.command {
        Commands::Show => commands::cart::show().await,
        Commands::Add { product_id } => commands::cart::add(ProductId::new(product_id)).await,
        Commands::Remove { product_id } => {
            commands::cart::remove(ProductId::new(product_id)).await
        }
        Commands::Update { product_id, amount } => {
            commands::cart::update(ProductId::new(product_id), amount).await
        }
    }
}
