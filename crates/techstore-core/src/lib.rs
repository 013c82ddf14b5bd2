//! # techstore-core: Pure Business Logic for Tech Store
//!
//! This crate is the **heart** of the Tech Store cart. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tech Store Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Rendering Layer (external)                      │   │
//! │  │    Product Grid ──► Cart Panel ──► Checkout Affordance          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents / projections                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront (session host)                       │   │
//! │  │    list_products, add_to_cart, update_cart_item, ...            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ techstore-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  catalog  │  │   cart    │  │   view    │  │   │
//! │  │   │   Money   │  │  Product  │  │   Cart    │  │ CartView  │  │   │
//! │  │   │           │  │  Catalog  │  │ CartItem  │  │ CartTotals│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Product records and the static catalog collaborator
//! - [`cart`] - Cart state and its mutation rules
//! - [`view`] - Read-only projections handed to rendering layers
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog record validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Cart Operations**: Cart mutations normalize out-of-range input
//!    instead of failing; the only typed errors live at the catalog boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use techstore_core::{Cart, Catalog, CartView};
//!
//! let catalog = Catalog::demo();
//! let mouse = catalog.iter().next().unwrap().clone();
//!
//! let mut cart = Cart::new();
//! cart.add_item(&mouse);
//! cart.add_item(&mouse);
//!
//! // One line, quantity 2, totals exact in cents
//! let view = CartView::from(&cart);
//! assert_eq!(view.totals.total_quantity, 2);
//! assert_eq!(view.totals.total_cents, 5998); // 2 × $29.99
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use techstore_core::Money` instead of
// `use techstore_core::money::Money`

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Product};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use view::{CartLine, CartTotals, CartView};
