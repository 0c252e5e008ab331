use thiserror::Error;

/// Manager errors
///
/// Only placement can fail. Empty-queue retrieval and unknown-id completion
/// are expected conditions and stay `Option`/`bool` returns, they never
/// surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// A line quantity is non-positive, or merging duplicate lines would
    /// overflow the line-item quantity range
    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidOrder { product_id: String, quantity: i32 },
}

pub type ManagerResult<T> = Result<T, ManagerError>;
