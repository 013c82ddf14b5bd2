//! # Cart State
//!
//! Owns the session's cart behind a single-writer lock.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Every operation runs to completion under the lock, so rapid repeated
//!    intents are applied strictly in arrival order - each produces a
//!    consistent snapshot before the next is applied, and no two adds are
//!    ever coalesced into one
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them modify state.
//! A RwLock would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use techstore_core::Cart;

/// Session-owned cart state.
///
/// The cart is created empty at session start and discarded at teardown -
/// there is no persistence. Rendering code only ever sees read projections
/// taken through [`CartState::with_cart`]; it never holds the cart itself.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = cart_state.with_cart(CartView::from);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
