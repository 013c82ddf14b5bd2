//! # Catalog State
//!
//! Read-only catalog shared across the session.
//!
//! The catalog is loaded and validated once at startup (from a file or the
//! built-in demo set) and is immutable afterwards - the core never fetches,
//! refreshes, or invalidates it. Because it never changes, it needs no lock.

use std::sync::Arc;

use techstore_core::{Catalog, Product};

/// Session-wide catalog handle.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Wraps a validated catalog for sharing.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Borrows the underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolves a product id against the catalog.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.catalog.get(product_id)
    }
}
