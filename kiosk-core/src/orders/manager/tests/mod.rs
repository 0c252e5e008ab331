use super::*;
use shared::order::OrderItemInput;

mod test_ranking;

fn create_test_manager() -> OrderManager {
    OrderManager::new()
}

fn line(product_id: &str, quantity: i32) -> OrderItemInput {
    OrderItemInput::new(product_id, quantity)
}

/// Place a one-line order and return it as the manager materialized it
fn place_single(manager: &OrderManager, is_priority: bool, product_id: &str) -> Order {
    manager
        .place(is_priority, &[line(product_id, 1)])
        .expect("placement with a valid line must succeed")
}
