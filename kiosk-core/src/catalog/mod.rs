//! Catalog Service - in-memory product management
//!
//! The order core only depends on the [`PriceLookup`] contract; this service
//! is the default in-process implementation stations run against. State is a
//! shared read-write cache, so one catalog instance can serve every station
//! concurrently while an admin station edits it.

use parking_lot::RwLock;
use shared::models::{PriceLookup, Product};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product with ID {0} already exists")]
    DuplicateProduct(String),
}

/// In-memory product catalog
#[derive(Clone, Default)]
pub struct CatalogService {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("products", &self.products.read().len())
            .finish()
    }
}

impl CatalogService {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-loaded with products
    ///
    /// Later entries with a duplicate id are dropped with a warning.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::new();
        for product in products {
            if let Err(e) = catalog.add_product(product) {
                tracing::warn!(error = %e, "Skipping product while seeding catalog");
            }
        }
        catalog
    }

    /// Add a new product, rejecting duplicate ids
    pub fn add_product(&self, product: Product) -> Result<(), CatalogError> {
        let mut products = self.products.write();
        if products.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }
        tracing::debug!(product_id = %product.id, name = %product.name, "Product added");
        products.insert(product.id.clone(), product);
        Ok(())
    }

    /// Find a product by id
    pub fn get_product(&self, id: &str) -> Option<Product> {
        self.products.read().get(id).cloned()
    }

    /// Replace an existing product, keyed by id
    ///
    /// Returns false if no product with that id exists.
    pub fn update_product(&self, product: Product) -> bool {
        let mut products = self.products.write();
        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product;
                true
            }
            None => false,
        }
    }

    /// Remove a product by id, returning whether it existed
    pub fn remove_product(&self, id: &str) -> bool {
        self.products.write().remove(id).is_some()
    }

    /// Snapshot of all products, sorted by id for stable display
    pub fn products(&self) -> Vec<Product> {
        let mut all: Vec<Product> = self.products.read().values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}

impl PriceLookup for CatalogService {
    fn lookup_price(&self, product_id: &str) -> Option<f64> {
        self.products.read().get(product_id).map(|p| p.price)
    }
}
