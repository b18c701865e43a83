//! HTTP access to the Shopify Admin REST order-search endpoint.

use crate::error::ApiError;
use crate::orders::Order;
use async_trait::async_trait;

mod client;

pub use client::{ClientOptions, ShopifyClient, DEFAULT_API_VERSION};

/// Order search interface used by the lookup loop.
///
/// Tests provide canned pages through this trait; the production path uses
/// [`ShopifyClient`].
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch the orders the remote search returns for `query`.
    async fn search_orders(&self, query: &str) -> Result<Vec<Order>, ApiError>;
}
