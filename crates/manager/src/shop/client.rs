//! HTTP shop API client implementation.

use cartkeeper_core::{CatalogProduct, ProductId, StockLevel};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::{CatalogService, ShopApiError, StockOracle};
use crate::config::CartConfig;

/// Client for the remote shop API.
///
/// Serves both the stock oracle and the catalog service; the two live on
/// the same server in every deployment we talk to. Cheaply cloneable -
/// `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct ShopApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ShopApiClient {
    /// Create a new shop API client.
    ///
    /// The request timeout comes from the configuration; the cart core
    /// itself never enforces one.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &CartConfig) -> Result<Self, ShopApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Resolve an endpoint path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ShopApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ShopApiError::Parse(format!("invalid endpoint path {path:?}: {e}")))
    }

    /// Fetch and decode a JSON body, mapping HTTP failures to typed errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        product_id: ProductId,
    ) -> Result<T, ShopApiError> {
        let url = self.endpoint(path)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ShopApiError::NotFound(product_id));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ShopApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ShopApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl StockOracle for ShopApiClient {
    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, ShopApiError> {
        self.get_json(&format!("stock/{product_id}"), product_id)
            .await
    }
}

#[async_trait]
impl CatalogService for ShopApiClient {
    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, ShopApiError> {
        self.get_json(&format!("products/{product_id}"), product_id)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn config() -> CartConfig {
        CartConfig {
            api_base_url: "http://localhost:3333/".parse().unwrap(),
            store_dir: PathBuf::from(".cartkeeper"),
            request_timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_client_builds_from_config() {
        assert!(ShopApiClient::new(&config()).is_ok());
    }

    #[test]
    fn test_endpoint_resolution() {
        let client = ShopApiClient::new(&config()).unwrap();

        let url = client.endpoint("stock/7").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/stock/7");

        let url = client.endpoint("products/7").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/products/7");
    }
}
