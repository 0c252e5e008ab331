//! Line item types and order lifecycle state

use serde::{Deserialize, Serialize};

/// Order lifecycle state while the order is owned by the core
///
/// A completed order is removed entirely; there is no terminal variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Placed, waiting for cashier retrieval
    #[default]
    Pending,
    /// Confirmed by the cashier, with the kitchen
    InPreparation,
}

/// One line in an order
///
/// `quantity` is strictly positive by construction: placement validates the
/// caller-supplied input before it is converted into this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Product ID (catalog key)
    pub product_id: String,
    /// How many of the product
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Line item input - the contract a placement station hands the core
///
/// Quantity is signed on purpose: the core rejects non-positive values
/// instead of silently dropping them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    /// Product ID
    pub product_id: String,
    /// Requested quantity (must be > 0)
    pub quantity: i32,
}

impl OrderItemInput {
    pub fn new(product_id: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}
