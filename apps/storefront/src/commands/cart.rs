//! # Cart Commands
//!
//! Intent handlers for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐            ┌───────────┐            ┌──────────┐         │
//! │  │  Empty   │───────────►│ Populated │───────────►│ Checkout │ (stub)  │
//! │  │  Cart    │            │           │            │ enabled  │         │
//! │  └──────────┘            └───────────┘            └──────────┘         │
//! │       ▲                       │                                         │
//! │       │                  add_to_cart                                    │
//! │       │                  update_cart_item                               │
//! │       │                  remove_from_cart                               │
//! │       │                       │                                         │
//! │       └── last line removed ──┘                                         │
//! │       └── clear_cart ─────────┘                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `add_to_cart` can fail (unknown product id). The other mutations
//! are total: they normalize rather than reject, exactly like the cart
//! operations they delegate to.

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};
use techstore_core::{CartView, CoreError};

/// Gets the current cart projection.
pub fn get_cart(cart: &CartState) -> CartView {
    debug!("get_cart command");
    cart.with_cart(|c| CartView::from(c))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by 1
/// - If product not in cart: added as a new line with quantity 1
/// - Price is "frozen" at time of adding (won't change if the catalog
///   record changes later)
///
/// ## Errors
/// Fails fast with `NOT_FOUND` when the id does not resolve against the
/// catalog - a phantom line is never created for an unknown id.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> Result<CartView, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .get(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_item(product);
        CartView::from(&*c)
    }))
}

/// Sets the quantity of a cart line to an absolute value.
///
/// ## Behavior
/// - Quantity 0 (or negative): removes the line
/// - Unknown id: no-op - only `add_to_cart` creates lines
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartView {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.set_quantity(product_id, quantity);
        CartView::from(&*c)
    })
}

/// Removes a line from the cart. No-op when the id is not in the cart.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartView {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(product_id);
        CartView::from(&*c)
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User starts over (`clear` in the shell)
pub fn clear_cart(cart: &CartState) -> CartView {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartView::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
