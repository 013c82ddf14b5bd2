//! # Command Layer
//!
//! The action boundary: synchronous intents dispatched into the session
//! state. Each command acquires the cart lock, applies exactly one
//! operation, and returns a fresh read projection - so the next read always
//! reflects the intent that was just applied.

mod cart;
mod catalog;

pub use cart::{add_to_cart, clear_cart, get_cart, remove_from_cart, update_cart_item};
pub use catalog::list_products;
