//! Order queue and lifecycle management

pub mod manager;

pub use manager::{ManagerConfig, ManagerError, ManagerResult, OrderManager, PreparationEvent};
