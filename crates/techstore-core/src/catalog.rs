//! # Catalog Module
//!
//! Product records and the static catalog collaborator.
//!
//! The catalog is supplied once at startup - from a JSON file or the
//! built-in demo set - and never refreshed. The cart core treats it as an
//! external, read-only collaborator: lookups resolve an id to a `Product`,
//! and the cart snapshots what it needs at add-time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_product, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Fields
/// - `id`: opaque unique identifier (uuid v4 when minted at runtime,
///   caller-chosen when loaded from a catalog file)
/// - `price_cents`: unit price in cents (smallest currency unit)
/// - `stock`: informational stock level - displayed, never enforced as a
///   purchase ceiling
/// - `glyph`: opaque display token the rendering layer shows next to the
///   name (the demo catalog uses emoji)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the grid and on cart lines.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Informational stock level.
    pub stock: i64,

    /// Opaque display token.
    pub glyph: String,
}

impl Product {
    /// Creates a product with a freshly minted uuid v4 id.
    pub fn new(name: impl Into<String>, price: Money, stock: i64, glyph: impl Into<String>) -> Self {
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price_cents: price.cents(),
            stock,
            glyph: glyph.into(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The ordered, validated set of purchasable products.
///
/// ## Invariants
/// - Every record passes `validation::validate_product`
/// - Product ids are unique
/// - Iteration order equals the supplied order (stable grid display)
///
/// Deliberately not deserializable: a catalog only comes into existence
/// through [`Catalog::new`], so no serde path can bypass validation.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from product records, failing fast on the first
    /// invalid or duplicate record.
    ///
    /// Validation happens here, at the input boundary, so that every later
    /// cart operation can assume well-formed products.
    pub fn new(products: Vec<Product>) -> ValidationResult<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(products.len());
        for product in &products {
            validate_product(product)?;
            if seen.contains(&product.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.clone(),
                });
            }
            seen.push(&product.id);
        }

        Ok(Catalog { products })
    }

    /// The built-in demo catalog: the six Tech Store products.
    pub fn demo() -> Self {
        Catalog {
            products: vec![
                Product::new("Wireless Mouse", Money::from_major_minor(29, 99), 15, "🖱️"),
                Product::new("Mechanical Keyboard", Money::from_major_minor(89, 99), 8, "⌨️"),
                Product::new("USB-C Cable", Money::from_major_minor(12, 99), 25, "🔌"),
                Product::new("Laptop Stand", Money::from_major_minor(45, 99), 12, "💻"),
                Product::new("Webcam HD", Money::from_major_minor(69, 99), 6, "📷"),
                Product::new("Headphones", Money::from_major_minor(79, 99), 10, "🎧"),
            ],
        }
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Looks up a product by its 1-based display position.
    ///
    /// The terminal shell addresses products the way the original grid did -
    /// by their position in the catalog - so users never type ids.
    pub fn get_by_position(&self, position: usize) -> Option<&Product> {
        position.checked_sub(1).and_then(|i| self.products.get(i))
    }

    /// Iterates products in supplied (display) order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
