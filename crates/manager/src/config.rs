//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CART_API_BASE_URL` - Base URL of the shop API serving
//!   `stock/{id}` and `products/{id}` (e.g., `http://localhost:3333`)
//!
//! ## Optional
//! - `CART_STORE_DIR` - Directory for the durable cart store
//!   (default: `.cartkeeper`)
//! - `CART_HTTP_TIMEOUT_SECS` - Timeout for shop API requests in seconds
//!   (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cartkeeper application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Base URL of the shop API. Always ends with a trailing slash so
    /// endpoint paths can be joined onto it directly.
    pub api_base_url: Url,
    /// Directory holding the durable cart store.
    pub store_dir: PathBuf,
    /// Timeout applied to each shop API request.
    pub request_timeout: Duration,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = parse_base_url("CART_API_BASE_URL", &get_required_env("CART_API_BASE_URL")?)?;
        let store_dir = PathBuf::from(get_env_or_default("CART_STORE_DIR", ".cartkeeper"));
        let request_timeout = parse_timeout(
            "CART_HTTP_TIMEOUT_SECS",
            &get_env_or_default("CART_HTTP_TIMEOUT_SECS", "10"),
        )?;

        Ok(Self {
            api_base_url,
            store_dir,
            request_timeout,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and normalize a base URL.
///
/// The path is forced to end with a slash; otherwise `Url::join` would
/// replace the final path segment instead of appending to it.
fn parse_base_url(var_name: &str, value: &str) -> Result<Url, ConfigError> {
    let mut url = value
        .parse::<Url>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Parse a timeout value in whole seconds.
fn parse_timeout(var_name: &str, value: &str) -> Result<Duration, ConfigError> {
    let secs = value
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if secs == 0 {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "timeout must be at least 1 second".to_string(),
        ));
    }

    Ok(Duration::from_secs(secs))
}
