//! # Cart Module
//!
//! Cart state and its mutation rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  User Intent              Operation                State Change         │
//! │  ───────────              ─────────                ────────────         │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_item() ───────────► qty += 1 or push    │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ───────► qty = n (0 removes) │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ────────► line deleted        │
//! │                                                                         │
//! │  New Session ────────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  View Cart ──────────────► totals / CartView ────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totality
//! Every mutation is defined for all inputs and never fails: a negative
//! quantity clamps to removal, and editing an id that is not in the cart is
//! a no-op. Only `add_item` creates lines, and it takes an already-resolved
//! `&Product`, so an unknown id can never turn into a phantom line here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Product;
use crate::money::Money;

// =============================================================================
// Cart Item
// =============================================================================

/// One product's line in the cart.
///
/// ## Design Notes
/// - `product_id`: Reference back to the catalog product
/// - name/price/glyph are a frozen snapshot of the product at add-time.
///   This ensures the cart displays consistent data even if the external
///   catalog changes after the item was added.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product id this line refers to.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart
    pub unit_price_cents: i64,

    /// Display glyph at time of adding (frozen).
    pub glyph: String,

    /// Quantity in cart. Always > 0 - a line driven to zero is deleted,
    /// never retained.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart line from a product, with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes
    /// later, this cart line retains the original price.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            glyph: product.glyph.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line subtotal (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges into
///   the existing line)
/// - Quantity is always > 0 (driving a line to 0 deletes it)
/// - Lines keep first-add order; quantity edits never reorder them
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in first-add order.
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - If product already in cart: quantity increases by 1
    /// - If product not in cart: a new line with quantity 1 is appended,
    ///   snapshotting the product's name, price, and glyph
    ///
    /// Always succeeds. Each discrete add is applied individually - rapid
    /// repeated adds each bump the quantity by exactly one.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::from_product(product));
    }

    /// Sets the quantity of a line to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line (negative input clamps to zero,
    ///   zero means removal - a zero-quantity line is never retained)
    /// - `quantity > 0` and line exists: sets it exactly (not a delta)
    /// - Line absent: no-op - only `add_item` creates lines
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes a line from the cart by product id.
    ///
    /// Removing an id that is not in the cart is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Clears all lines from the cart, returning it to the Empty phase.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct product lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    ///
    /// This is the number the cart badge shows - every discrete add is
    /// reflected, not the count of distinct products.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the cart total in cents.
    ///
    /// Computed on demand from the lines - there is no cached total that
    /// could drift out of sync.
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total().cents()).sum()
    }

    /// Calculates the cart total as Money.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Checks if the cart is empty.
    ///
    /// Empty and Populated are the two observable phases: Empty renders the
    /// "cart is empty" affordance, Populated renders lines plus an enabled
    /// checkout action.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_add_single_item() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_cents(), 2999); // $29.99
    }

    #[test]
    fn test_add_two_distinct_items() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));
        cart.add_item(&test_product("id3", 1299));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_cents(), 4298); // $42.98
    }

    /// Adding the same product n times yields exactly one line with
    /// quantity n, never n separate lines.
    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        let product = test_product("id1", 2999);

        cart.add_item(&product);
        cart.add_item(&product);
        cart.add_item(&product);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.total_cents(), 8997); // $89.97
    }

    #[test]
    fn test_set_quantity_absolute() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));

        cart.set_quantity("id1", 2);
        assert_eq!(cart.total_cents(), 5998); // $59.98

        // Absolute set, not a delta
        cart.set_quantity("id1", 2);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));

        cart.set_quantity("id1", 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert!(cart.items.iter().all(|i| i.product_id != "id1"));
    }

    #[test]
    fn test_set_quantity_negative_clamps_to_removal() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));

        cart.set_quantity("id1", -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));

        // set_quantity never creates a line - only add_item does
        cart.set_quantity("id9", 5);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));
        cart.add_item(&test_product("id3", 1299));

        cart.remove_item("id1");

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].product_id, "id3");

        // Removing an absent id is a no-op
        cart.remove_item("id1");
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_mixed_scenario_totals() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));
        cart.add_item(&test_product("id4", 4599));
        cart.set_quantity("id1", 2);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_cents(), 10597); // $105.97
        assert_eq!(format!("{}", cart.total()), "$105.97");
    }

    /// Line order equals first-add order, regardless of later edits.
    #[test]
    fn test_first_add_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));
        cart.add_item(&test_product("id3", 1299));
        cart.add_item(&test_product("id4", 4599));

        cart.set_quantity("id1", 5);
        cart.add_item(&test_product("id3", 1299));

        let order: Vec<&str> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(order, vec!["id1", "id3", "id4"]);
    }

    /// Aggregates always equal the sums over lines.
    #[test]
    fn test_aggregate_consistency() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));
        cart.add_item(&test_product("id3", 1299));
        cart.set_quantity("id3", 4);

        let quantity_sum: i64 = cart.items.iter().map(|i| i.quantity).sum();
        let price_sum: i64 = cart
            .items
            .iter()
            .map(|i| i.unit_price_cents * i.quantity)
            .sum();

        assert_eq!(cart.total_quantity(), quantity_sum);
        assert_eq!(cart.total_cents(), price_sum);
    }

    /// Adding then fully removing returns the cart to a state
    /// indistinguishable (by content) from a fresh one.
    #[test]
    fn test_empty_populated_round_trip() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        cart.add_item(&test_product("id1", 2999));
        assert!(!cart.is_empty());

        cart.set_quantity("id1", 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_cents(), 0);
        assert_eq!(cart.item_count(), Cart::new().item_count());
    }

    /// Mutating the catalog copy after an add does not change the cart
    /// line - name and price are frozen at add-time.
    #[test]
    fn test_snapshot_is_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut product = test_product("id1", 2999);
        cart.add_item(&product);

        product.price_cents = 9999;
        product.name = "Renamed".to_string();

        assert_eq!(cart.items[0].unit_price_cents, 2999);
        assert_eq!(cart.items[0].name, "Product id1");
        assert_eq!(cart.total_cents(), 2999);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));
        cart.add_item(&test_product("id3", 1299));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("id1", 2999));
        cart.set_quantity("id1", 3);

        assert_eq!(cart.items[0].line_total().cents(), 8997);
        assert_eq!(format!("{}", cart.items[0].line_total()), "$89.97");
    }
}
