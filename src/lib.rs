//! Interactive order lookup against the Shopify Admin REST API.
//!
//! A free-text query is classified into a [`query::Matcher`], the store's order
//! search endpoint is queried with the raw text, and the first exact hit is
//! reduced to a fixed-field [`orders::ProjectedOrder`] for display.
//!
//! ```no_run
//! use order_lookup::api::{ClientOptions, ShopifyClient};
//! use order_lookup::config::Config;
//! use order_lookup::lookup::{lookup_order, LookupOutcome};
//!
//! # async fn example() {
//! let config = Config::from_input("my-store", "shpat_...").unwrap();
//! let client = ShopifyClient::new(&config, &ClientOptions::default());
//! if let LookupOutcome::Found(order) = lookup_order(&client, "#1001").await.unwrap() {
//!     println!("{}", order.to_pretty_json());
//! }
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod orders;
pub mod query;
pub mod repl;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
