//! # Validation Module
//!
//! Catalog record validation for the Tech Store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Type validation (a price must at least be an integer)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, via Catalog::new                                │
//! │  ├── Non-empty ids and names                                           │
//! │  ├── Non-negative prices and stock                                     │
//! │  └── No duplicate product ids                                          │
//! │                                                                         │
//! │  Cart mutations are deliberately NOT validated: they normalize         │
//! │  out-of-range input instead (see the cart module).                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::Product;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name.
const MAX_NAME_LEN: usize = 200;

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - Must be at most 64 characters (uuid strings are 36)
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use techstore_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Wireless Mouse").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use techstore_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2999).is_ok());  // $29.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// Stock is informational only (it is displayed, never enforced as a
/// purchase ceiling), but a negative level in a catalog file is a data bug.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a complete product record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_stock(product.stock)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
