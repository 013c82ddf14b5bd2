//! # Error Types
//!
//! Domain-specific error types for techstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  techstore-core errors (this file)                                     │
//! │  ├── CoreError        - Domain errors (unknown product, etc.)          │
//! │  └── ValidationError  - Catalog record validation failures             │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the rendering layer sees (serialized)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Rendering layer        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Do NOT Occur
//! Cart mutations are total: out-of-range quantities are clamped and unknown
//! ids are no-ops at that layer. The typed errors here guard the two real
//! failure boundaries - catalog construction and intent resolution.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain failures at the catalog boundary.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - An add intent carries an id the catalog never contained
    /// - A stale rendering layer references a product from an old catalog
    ///
    /// Raised when resolving an intent, never by the cart itself: the cart
    /// only ever receives an already-resolved `Product` reference, so a
    /// phantom line item cannot be created.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog record validation errors.
///
/// These errors occur when a catalog supplied at startup doesn't meet
/// requirements. Used to fail fast before any cart session starts.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("p-404".to_string());
        assert_eq!(err.to_string(), "Product not found: p-404");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "p-1".to_string(),
        };
        assert_eq!(err.to_string(), "id 'p-1' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
