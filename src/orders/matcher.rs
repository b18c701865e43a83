//! First-match scan over a fetched order page.

use super::Order;
use crate::query::Matcher;

impl Matcher {
    /// True when `order` satisfies this matcher exactly.
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::Name(name) => order.name.as_deref() == Some(name.as_str()),
            Self::Num(num) => order.order_number == Some(*num),
            Self::Id(id) => order.id == *id,
        }
    }
}

/// Return the earliest order in `orders` that satisfies `matcher`.
pub fn find_match<'a>(orders: &'a [Order], matcher: &Matcher) -> Option<&'a Order> {
    orders.iter().find(|order| matcher.matches(order))
}
