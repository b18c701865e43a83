//! One query through the classify -> fetch -> match -> project pipeline.

use crate::api::OrderSource;
use crate::error::ApiError;
use crate::orders::{find_match, ProjectedOrder};
use crate::query::{classify, Matcher};

/// Result of a completed lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(ProjectedOrder),
    NotFound,
}

/// Look up one raw query against `source`.
///
/// The raw text (not the classified value) is sent as the remote search
/// term; the classified [`Matcher`] then picks the exact hit client-side.
pub async fn lookup_order(
    source: &dyn OrderSource,
    query: &str,
) -> Result<LookupOutcome, ApiError> {
    let matcher: Matcher = classify(query);
    tracing::debug!(%matcher, "classified query");

    let orders = source.search_orders(query).await?;
    Ok(match find_match(&orders, &matcher) {
        Some(order) => {
            tracing::info!(id = order.id, "order matched");
            LookupOutcome::Found(ProjectedOrder::try_from(order)?)
        }
        None => {
            tracing::info!(fetched = orders.len(), "no order matched");
            LookupOutcome::NotFound
        }
    })
}
