//! Fixed-field display view of an order.

use super::{LineItem, Order};
use crate::error::ApiError;
use serde::Serialize;
use serde_json::Value;

/// The subset of an [`Order`] shown to the user.
///
/// Every key is always serialized; values absent from the source order render
/// as `null`. Built with `TryFrom<&Order>`, which requires `line_items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedOrder {
    pub id: i64,
    pub discount_codes: Option<Value>,
    pub order_number: Option<i64>,
    pub subtotal_price: Option<Value>,
    pub total_discounts: Option<Value>,
    pub total_line_items_price: Option<Value>,
    pub total_shipping_price_set: Option<Value>,
    pub discount_applications: Option<Value>,
    pub line_items: Vec<ProjectedLineItem>,
}

/// The subset of a [`LineItem`] shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedLineItem {
    pub price: Option<Value>,
    pub product_id: Option<Value>,
    pub sku: Option<Value>,
    pub title: Option<Value>,
    pub total_discount: Option<Value>,
    pub discount_allocations: Option<Value>,
}

impl From<&LineItem> for ProjectedLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            price: item.price.clone(),
            product_id: item.product_id.clone(),
            sku: item.sku.clone(),
            title: item.title.clone(),
            total_discount: item.total_discount.clone(),
            discount_allocations: item.discount_allocations.clone(),
        }
    }
}

impl TryFrom<&Order> for ProjectedOrder {
    type Error = ApiError;

    /// Fails only when the order carries no `line_items` list.
    fn try_from(order: &Order) -> Result<Self, Self::Error> {
        let line_items = order.line_items.as_ref().ok_or(ApiError::MissingField {
            order_id: order.id,
            field: "line_items",
        })?;
        Ok(Self {
            id: order.id,
            discount_codes: order.discount_codes.clone(),
            order_number: order.order_number,
            subtotal_price: order.subtotal_price.clone(),
            total_discounts: order.total_discounts.clone(),
            total_line_items_price: order.total_line_items_price.clone(),
            total_shipping_price_set: order.total_shipping_price_set.clone(),
            discount_applications: order.discount_applications.clone(),
            line_items: line_items.iter().map(ProjectedLineItem::from).collect(),
        })
    }
}

impl ProjectedOrder {
    /// Fully expanded, two-space indented JSON dump.
    pub fn to_pretty_json(&self) -> String {
        // Serializing plain structs of JSON values cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
