//! Order aggregate - one customer's basket and its lifecycle state
//!
//! Identity (`id`, `created_at`, `is_priority`) is immutable after the core
//! mints it at placement. Contents mutate only through [`Order::add_item`].
//! The total is never stored: the catalog is authoritative for prices, so it
//! is recomputed on demand through [`PriceLookup`].

pub mod types;

pub use types::{OrderItem, OrderItemInput, OrderState};

use crate::models::PriceLookup;
use serde::{Deserialize, Serialize};

/// A customer's order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique ID, assigned by the manager at placement
    pub id: String,
    /// Placement timestamp (Unix milliseconds), used only as the ranking tie-break
    pub created_at: i64,
    /// Whether the customer is entitled to expedited service
    pub is_priority: bool,
    /// Line items, first-seen order preserved
    pub items: Vec<OrderItem>,
    /// Lifecycle state
    pub state: OrderState,
}

impl Order {
    /// Create a new pending order with no items
    pub fn new(id: impl Into<String>, is_priority: bool, created_at: i64) -> Self {
        Self {
            id: id.into(),
            created_at,
            is_priority,
            items: Vec::new(),
            state: OrderState::Pending,
        }
    }

    /// Add a line item, merging with an existing line for the same product
    ///
    /// A product id appears at most once: repeated additions sum quantities
    /// while the line keeps its first-seen position for display. The merged
    /// quantity saturates at `u32::MAX` rather than wrapping, so it can never
    /// fall back to zero.
    pub fn add_item(&mut self, product_id: &str, quantity: u32) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }
        self.items.push(OrderItem::new(product_id, quantity));
    }

    /// Total cost of all line items, priced against the catalog
    ///
    /// Products the catalog no longer knows contribute zero. An empty order
    /// reports a zero total.
    pub fn total(&self, prices: &impl PriceLookup) -> f64 {
        self.items
            .iter()
            .map(|item| match prices.lookup_price(&item.product_id) {
                Some(price) => price * item.quantity as f64,
                None => {
                    tracing::warn!(
                        order_id = %self.id,
                        product_id = %item.product_id,
                        "Product missing from catalog, priced as zero"
                    );
                    0.0
                }
            })
            .sum()
    }

    /// Total quantity across all lines, saturating at `u32::MAX`
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order #{} ({})",
            self.id,
            if self.is_priority { "PRIORITY" } else { "NORMAL" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedPrices(HashMap<String, f64>);

    impl PriceLookup for FixedPrices {
        fn lookup_price(&self, product_id: &str) -> Option<f64> {
            self.0.get(product_id).copied()
        }
    }

    fn prices(entries: &[(&str, f64)]) -> FixedPrices {
        FixedPrices(
            entries
                .iter()
                .map(|(id, p)| (id.to_string(), *p))
                .collect(),
        )
    }

    #[test]
    fn test_add_item_merges_duplicate_product() {
        let mut order = Order::new("100", false, 0);
        order.add_item("A", 2);
        order.add_item("B", 1);
        order.add_item("A", 3);

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_id, "A");
        assert_eq!(order.items[0].quantity, 5);
        assert_eq!(order.items[1].product_id, "B");
        assert_eq!(order.items[1].quantity, 1);
    }

    #[test]
    fn test_total_prices_against_catalog() {
        let mut order = Order::new("100", false, 0);
        order.add_item("A", 2);
        order.add_item("B", 1);
        order.add_item("A", 3);

        let catalog = prices(&[("A", 10.0), ("B", 4.5)]);
        assert_eq!(order.total(&catalog), 5.0 * 10.0 + 4.5);
    }

    #[test]
    fn test_total_of_empty_order_is_zero() {
        let order = Order::new("100", true, 0);
        assert_eq!(order.total(&prices(&[])), 0.0);
        assert_eq!(order.item_count(), 0);
    }

    #[test]
    fn test_add_item_saturates_instead_of_wrapping() {
        let mut order = Order::new("100", false, 0);
        order.add_item("A", u32::MAX);
        order.add_item("A", 5);

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, u32::MAX);

        order.add_item("B", u32::MAX);
        assert_eq!(order.item_count(), u32::MAX);
    }

    #[test]
    fn test_order_round_trips_for_station_frontends() {
        let mut order = Order::new("100", true, 42);
        order.add_item("A", 2);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["state"], "PENDING");
        assert_eq!(json["items"][0]["product_id"], "A");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_total_skips_unknown_products() {
        let mut order = Order::new("100", false, 0);
        order.add_item("A", 2);
        order.add_item("GONE", 7);

        let catalog = prices(&[("A", 3.0)]);
        assert_eq!(order.total(&catalog), 6.0);
    }
}
