//! Shared data model for the kiosk order system
//!
//! Types consumed by every station frontend (customer kiosk, cashier
//! terminal, kitchen display) as well as the core:
//!
//! - **Order model** (`order`): the order aggregate, line items, lifecycle state
//! - **Catalog model** (`models`): products and the price lookup contract
//! - **Utilities** (`util`): timestamp helpers

pub mod models;
pub mod order;
pub mod util;

// Re-export common types
pub use models::{PriceLookup, Product};
pub use order::{Order, OrderItem, OrderItemInput, OrderState};
