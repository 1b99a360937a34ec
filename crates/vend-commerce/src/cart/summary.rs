//! Order summary math.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::cart::CartState;
use crate::money::round_money;

/// Flat demo tax rate.
const TAX_RATE: Decimal = dec!(0.08);

/// Orders above this subtotal ship free.
const FREE_SHIPPING_THRESHOLD: Decimal = dec!(50.00);

/// Flat shipping fee below the free-shipping threshold.
const SHIPPING_FEE: Decimal = dec!(5.99);

/// Derived checkout summary for a cart.
///
/// Read-only data computed from [`CartState`] on demand — it is not store
/// state and is never persisted. Uses the same rounding rule as the cart
/// totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub item_count: u32,
}

impl CartSummary {
    /// Compute the summary for `cart`.
    pub fn for_cart(cart: &CartState) -> Self {
        let subtotal = cart.total_price;
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            SHIPPING_FEE
        };
        let tax = round_money(subtotal * TAX_RATE);
        let total = round_money(subtotal + shipping + tax);

        Self {
            subtotal,
            shipping,
            tax,
            total,
            item_count: cart.total_items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
