//! Kiosk order core - queue and lifecycle management
//!
//! The in-memory authority for customer orders in a single kiosk
//! installation. Multiple stations (customer kiosks, the cashier terminal,
//! the kitchen display) share one [`OrderManager`] and drive orders through
//! placement, cashier confirmation and kitchen preparation.
//!
//! # Module structure
//!
//! ```text
//! kiosk-core/src/
//! ├── orders/        # Order queue and lifecycle manager
//! ├── catalog/       # In-memory product catalog service
//! └── utils/         # Logging setup
//! ```

pub mod catalog;
pub mod orders;
pub mod utils;

// Re-export public types
pub use catalog::{CatalogError, CatalogService};
pub use orders::{
    ManagerConfig, ManagerError, ManagerResult, OrderManager, PreparationEvent,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
