//! The cart store: state plus persistence.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};
use vend_storage::{Flusher, KeyValueStore};

use crate::cart::{CartLineItem, CartState};
use crate::catalog::Product;
use crate::ids::ProductId;

/// Storage key for the persisted cart.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// The authoritative in-memory cart, mirrored into a key-value backend.
///
/// Mutations take `&mut self`, update the in-memory state synchronously, and
/// hand a serialized snapshot to a background flusher — the backend is an
/// eventually-consistent mirror, never consulted during a session. None of
/// the mutations can fail: inputs are clamped, and persistence failures are
/// swallowed at the storage boundary.
///
/// `is_loading` is advisory UI state held for the duration of each mutation
/// (modeling an eventual asynchronous backend sync), not a lock. Rapid
/// repeated calls are not coalesced here; a double-tap legitimately
/// double-increments unless the caller debounces.
pub struct CartStore {
    state: CartState,
    is_loading: bool,
    flusher: Flusher,
}

impl CartStore {
    /// Load the persisted cart from `storage`, or start fresh.
    ///
    /// Any read failure, absent key, or corrupt blob means a fresh, empty
    /// cart. Totals from a persisted blob are never trusted: they are
    /// recomputed from the persisted items, since an older schema or a
    /// partial write may have serialized them inconsistently.
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = match storage.get_item(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<CartState>(&raw) {
                Ok(mut state) => {
                    state.recompute_totals();
                    debug!(items = state.items.len(), "rehydrated cart");
                    state
                }
                Err(err) => {
                    warn!(error = %err, "persisted cart is corrupt; starting fresh");
                    CartState::new()
                }
            },
            Ok(None) => CartState::new(),
            Err(err) => {
                warn!(error = %err, "failed to read persisted cart; starting fresh");
                CartState::new()
            }
        };

        Self {
            state,
            is_loading: false,
            flusher: Flusher::spawn(storage, CART_STORAGE_KEY),
        }
    }

    /// Add `quantity` of `product`; re-adding merges into the existing line
    /// item. Quantities are clamped, never rejected.
    pub fn add_item(&mut self, product: Product, quantity: i64) {
        self.is_loading = true;
        self.state.add_item(product, quantity);
        self.persist();
        self.is_loading = false;
    }

    /// Remove the line item for `product_id`. No-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.is_loading = true;
        self.state.remove_item(product_id);
        self.persist();
        self.is_loading = false;
    }

    /// Remove several line items with a single totals recomputation.
    pub fn remove_items(&mut self, product_ids: &[ProductId]) {
        self.is_loading = true;
        self.state.remove_items(product_ids);
        self.persist();
        self.is_loading = false;
    }

    /// Set the quantity for `product_id`; zero or negative removes the item.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.is_loading = true;
        self.state.update_quantity(product_id, quantity);
        self.persist();
        self.is_loading = false;
    }

    /// Empty the cart. Executes unconditionally — confirmation surfaces
    /// belong to the caller.
    pub fn clear(&mut self) {
        self.is_loading = true;
        self.state.clear();
        self.persist();
        self.is_loading = false;
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn total_items(&self) -> u32 {
        self.state.total_items
    }

    pub fn total_price(&self) -> Decimal {
        self.state.total_price
    }

    pub fn last_updated(&self) -> i64 {
        self.state.last_updated
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.state.item_quantity(product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.state.contains(product_id)
    }

    pub fn item_subtotal(&self, product_id: ProductId) -> Decimal {
        self.state.item_subtotal(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Wait until every snapshot queued so far has been written (or its
    /// failure logged). For tests and orderly shutdown.
    pub async fn flush(&self) {
        self.flusher.flush().await;
    }

    fn persist(&self) {
        match serde_json::to_string(&self.state) {
            Ok(snapshot) => self.flusher.write(snapshot),
            // Cart state always serializes; keep the failure observable
            // rather than propagating an error the API has no channel for.
            Err(err) => warn!(error = %err, "failed to serialize cart snapshot"),
        }
    }
}
