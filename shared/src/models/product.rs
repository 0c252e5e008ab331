//! Product model and the price lookup contract
//!
//! The catalog is authoritative for prices. The order core never stores a
//! price; it computes totals on demand through [`PriceLookup`], so a price
//! change in the catalog is reflected in every subsequent total.

use serde::{Deserialize, Serialize};

/// One menu item in the kiosk catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique ID (e.g. "C1")
    pub id: String,
    /// Display name (e.g. "Burger Meal")
    pub name: String,
    /// Unit price
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Price lookup contract the order core depends on
///
/// `None` means the product is unknown to the catalog. That is a soft
/// condition for callers, not an error.
pub trait PriceLookup {
    fn lookup_price(&self, product_id: &str) -> Option<f64>;
}
