//! Cart state and line item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{extended_price, round_money};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 99;

/// Minimum quantity for a line item that exists at all.
pub const MIN_QUANTITY_PER_ITEM: u32 = 1;

/// Clamp a requested quantity into the allowed range.
///
/// Invalid and negative quantities are sanitized, never rejected: there is
/// no invalid state a caller can construct through the cart's operations.
fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(MIN_QUANTITY_PER_ITEM as i64, MAX_QUANTITY_PER_ITEM as i64) as u32
}

/// A line item: a catalog product plus a quantity.
///
/// Identity is the product id; a cart holds at most one line item per
/// product. Serialized flat (product fields plus `quantity`), matching the
/// persisted layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn unit_price(&self) -> Decimal {
        self.product.price
    }

    /// `price * quantity`, rounded to 2 decimal places.
    pub fn subtotal(&self) -> Decimal {
        round_money(extended_price(self.product.price, self.quantity))
    }
}

/// The cart: an ordered list of line items plus cached totals.
///
/// `total_items` and `total_price` are always recomputable from `items`
/// alone. They are cache fields, recomputed from scratch after every
/// mutation and after every load from storage — never incrementally updated
/// and never trusted from a persisted blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Line items in insertion order. Order is display-only.
    pub items: Vec<CartLineItem>,
    /// Sum of all line item quantities.
    pub total_items: u32,
    /// Rounded sum of `price * quantity` over all line items.
    pub total_price: Decimal,
    /// Unix timestamp (seconds) of the last mutation.
    pub last_updated: i64,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: Decimal::ZERO,
            last_updated: current_timestamp(),
        }
    }

    /// Add `quantity` of `product`.
    ///
    /// If a line item for the product exists its quantity becomes the
    /// clamped sum; otherwise a new line item is appended with the clamped
    /// quantity.
    pub fn add_item(&mut self, product: Product, quantity: i64) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            let merged = i64::from(existing.quantity).saturating_add(quantity);
            existing.quantity = clamp_quantity(merged);
        } else {
            self.items
                .push(CartLineItem::new(product, clamp_quantity(quantity)));
        }
        self.finish_mutation();
    }

    /// Remove the line item for `product_id`. No-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        let removed = self.items.len() < len_before;
        self.finish_mutation();
        removed
    }

    /// Remove every line item whose product id appears in `product_ids`,
    /// in a single pass with one totals recomputation.
    pub fn remove_items(&mut self, product_ids: &[ProductId]) {
        self.items.retain(|i| !product_ids.contains(&i.product.id));
        self.finish_mutation();
    }

    /// Set the quantity for `product_id`.
    ///
    /// A quantity of zero or less means "remove" — it delegates to
    /// [`CartState::remove_item`] rather than being an error. Positive
    /// quantities are clamped. No-op if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = clamp_quantity(quantity);
        }
        self.finish_mutation();
    }

    /// Empty the cart and zero the totals.
    pub fn clear(&mut self) {
        self.items.clear();
        self.finish_mutation();
    }

    /// Quantity for `product_id`, 0 if absent.
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Whether the cart holds a line item for `product_id`.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// Rounded `price * quantity` for `product_id`, zero if absent.
    pub fn item_subtotal(&self, product_id: ProductId) -> Decimal {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map(CartLineItem::subtotal)
            .unwrap_or(Decimal::ZERO)
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recompute the cached totals from `items`.
    ///
    /// The total price is rounded once, after summation; see
    /// [`crate::money`] for the policy.
    pub fn recompute_totals(&mut self) {
        self.total_items = self.items.iter().map(|i| i.quantity).sum();
        let sum: Decimal = self
            .items
            .iter()
            .map(|i| extended_price(i.product.price, i.quantity))
            .sum();
        self.total_price = round_money(sum);
    }

    fn finish_mutation(&mut self) {
        self.recompute_totals();
        self.last_updated = current_timestamp();
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
