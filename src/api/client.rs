//! Admin REST client for `GET /admin/api/{version}/orders.json`.

use super::OrderSource;
use crate::config::Config;
use crate::error::ApiError;
use crate::orders::{Order, OrdersEnvelope};
use async_trait::async_trait;
use std::time::Duration;

/// Admin API version the order search is pinned to.
pub const DEFAULT_API_VERSION: &str = "2021-07";

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Transport knobs that do not belong in the persisted credential file.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_version: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

/// Client bound to one store and access token.
pub struct ShopifyClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl ShopifyClient {
    /// Build a client for `https://{domain}.myshopify.com/admin/api/{version}`.
    pub fn new(config: &Config, options: &ClientOptions) -> Self {
        let base_url = format!(
            "https://{}.myshopify.com/admin/api/{}",
            config.domain, options.api_version
        );
        Self::with_base_url(&base_url, &config.access_token, options.timeout)
    }

    /// Build a client against an explicit API root (used by tests and proxies).
    pub fn with_base_url(base_url: &str, access_token: &str, timeout: Option<Duration>) -> Self {
        Self {
            http: build_http_client(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Orders endpoint URL this client queries.
    pub fn orders_url(&self) -> String {
        format!("{}/orders.json", self.base_url)
    }

    /// Run one order search. No pagination: only the first page is returned.
    pub async fn search_orders(&self, query: &str) -> Result<Vec<Order>, ApiError> {
        let url = self.orders_url();
        tracing::debug!(%url, query, "searching orders");

        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "order search failed");
            return Err(ApiError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: OrdersEnvelope = serde_json::from_slice(&bytes)?;
        tracing::debug!(count = envelope.orders.len(), "order search returned");
        Ok(envelope.orders)
    }
}

#[async_trait]
impl OrderSource for ShopifyClient {
    async fn search_orders(&self, query: &str) -> Result<Vec<Order>, ApiError> {
        ShopifyClient::search_orders(self, query).await
    }
}

fn build_http_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    // Fall back to reqwest defaults if builder creation fails for any reason.
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}
