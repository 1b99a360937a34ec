//! Shopping cart: line items, derived totals, persistence.

mod state;
mod store;
mod summary;

pub use state::{CartLineItem, CartState, MAX_QUANTITY_PER_ITEM, MIN_QUANTITY_PER_ITEM};
pub use store::{CartStore, CART_STORAGE_KEY};
pub use summary::CartSummary;
