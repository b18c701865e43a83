//! Order records returned by the Admin REST API and the views derived from
//! them.
//!
//! Only the fields this tool matches on or displays are decoded; everything
//! else in the payload is ignored. Money and discount structures are kept as
//! raw JSON so they print exactly as the API returned them.

mod matcher;
mod projection;

pub use matcher::find_match;
pub use projection::{ProjectedLineItem, ProjectedOrder};

use serde::Deserialize;
use serde_json::Value;

/// One order from `GET /orders.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub order_number: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub discount_codes: Option<Value>,
    #[serde(default)]
    pub subtotal_price: Option<Value>,
    #[serde(default)]
    pub total_discounts: Option<Value>,
    #[serde(default)]
    pub total_line_items_price: Option<Value>,
    #[serde(default)]
    pub total_shipping_price_set: Option<Value>,
    #[serde(default)]
    pub discount_applications: Option<Value>,
    /// Only required on the order that gets projected; siblings on the same
    /// page may omit it.
    #[serde(default)]
    pub line_items: Option<Vec<LineItem>>,
}

/// One line item nested in an [`Order`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub product_id: Option<Value>,
    #[serde(default)]
    pub sku: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub total_discount: Option<Value>,
    #[serde(default)]
    pub discount_allocations: Option<Value>,
}

/// Response envelope of the order-search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersEnvelope {
    pub orders: Vec<Order>,
}
