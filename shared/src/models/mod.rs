//! Catalog-side data models

pub mod product;

pub use product::{PriceLookup, Product};
