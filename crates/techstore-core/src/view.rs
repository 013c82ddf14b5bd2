//! # View Module
//!
//! Read-only projections of cart state for rendering layers.
//!
//! The core never assumes a specific reactivity mechanism: a rendering
//! layer polls (or is handed) a fresh `CartView` after each mutation. The
//! projection is plain cloned data, so no reader can mutate cart state
//! through it, and it is derived on demand - there is no cached copy that
//! could drift from the cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartItem};
use crate::money::Money;

/// One cart line as the rendering layer sees it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub glyph: String,
    pub quantity: i64,
    /// unit_price × quantity, precomputed so display code does no math.
    pub line_total_cents: i64,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        CartLine {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.unit_price_cents,
            glyph: item.glyph.clone(),
            quantity: item.quantity,
            line_total_cents: item.line_total().cents(),
        }
    }
}

impl CartLine {
    /// Returns the line subtotal as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct product lines.
    pub item_count: usize,
    /// Sum of all line quantities - the cart badge number.
    pub total_quantity: i64,
    /// Sum of all line subtotals, exact in cents.
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total_cents(),
        }
    }
}

/// The complete read projection handed to rendering layers.
///
/// ## Phases
/// - `is_empty == true`: render the "cart is empty" affordance
/// - `is_empty == false`: render the lines, the total, and an enabled
///   checkout action
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub is_empty: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            lines: cart.items.iter().map(CartLine::from).collect(),
            totals: CartTotals::from(cart),
            is_empty: cart.is_empty(),
        }
    }
}

impl CartView {
    /// Returns the cart total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.totals.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents,
            stock: 10,
            glyph: "📦".to_string(),
        }
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::from(&Cart::new());

        assert!(view.is_empty);
        assert!(view.lines.is_empty());
        assert_eq!(view.totals.total_quantity, 0);
        assert_eq!(view.totals.total_cents, 0);
    }

    #[test]
    fn test_populated_view() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));
        cart.add_item(&test_product("id4", 4599));
        cart.set_quantity("id1", 2);

        let view = CartView::from(&cart);

        assert!(!view.is_empty);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.totals.item_count, 2);
        assert_eq!(view.totals.total_quantity, 3);
        assert_eq!(view.totals.total_cents, 10597);
        assert_eq!(format!("{}", view.total()), "$105.97");

        // Lines in first-add order with precomputed subtotals
        assert_eq!(view.lines[0].product_id, "id1");
        assert_eq!(view.lines[0].line_total_cents, 5998);
        assert_eq!(view.lines[1].product_id, "id4");
        assert_eq!(view.lines[1].line_total_cents, 4599);
    }

    /// The projection is a value: mutating the cart afterwards does not
    /// change an already-taken view.
    #[test]
    fn test_view_is_a_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));

        let view = CartView::from(&cart);
        cart.set_quantity("id1", 5);

        assert_eq!(view.totals.total_quantity, 1);
        assert_eq!(view.totals.total_cents, 2999);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));

        let json = serde_json::to_value(CartView::from(&cart)).unwrap();
        assert_eq!(json["isEmpty"], false);
        assert_eq!(json["totals"]["totalCents"], 2999);
        assert_eq!(json["lines"][0]["productId"], "id1");
        assert_eq!(json["lines"][0]["lineTotalCents"], 2999);
    }
}
