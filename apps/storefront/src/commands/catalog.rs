//! # Catalog Commands
//!
//! Read-only intents against the catalog collaborator.

use tracing::debug;

use crate::state::CatalogState;
use techstore_core::Product;

/// Lists all catalog products in display order.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    catalog.catalog().iter().cloned().collect()
}
