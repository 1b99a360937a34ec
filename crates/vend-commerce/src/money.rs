//! Monetary rounding policy.
//!
//! Prices and totals are `rust_decimal::Decimal`, so arithmetic is exact
//! until the single rounding step. The policy, pinned by tests:
//!
//! - round half up (`MidpointAwayFromZero`) to 2 decimal places;
//! - totals are rounded **after** summation, never per line.
//!
//! Rounding after summation avoids compounding per-line error, at the cost
//! of occasionally differing from a per-line-rounded total by a cent. With
//! decimal arithmetic the half-up rule is exact: a line priced 9.995 totals
//! 10.00, independent of any binary floating point representation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for monetary values.
const MONEY_SCALE: u32 = 2;

/// Round a monetary amount to 2 decimal places, half up.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Unrounded extended price for a line: `price * quantity`.
///
/// Callers sum these and round the sum once via [`round_money`].
pub fn extended_price(price: Decimal, quantity: u32) -> Decimal {
    price * Decimal::from(quantity)
}
