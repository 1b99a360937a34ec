//! User-created product listings.
//!
//! A parallel CRUD store to the cart, for products the user authors locally:
//! same in-memory-first persistence pattern, no quantity semantics. Unlike
//! the cart — whose operations cannot fail and which therefore has no error
//! channel — these operations return a `Result`, the single error channel
//! for callers to render.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vend_storage::{Flusher, KeyValueStore};

use crate::error::CommerceError;
use crate::ids::{UserId, UserProductId};

/// Storage key for the persisted listings.
pub const USER_PRODUCTS_STORAGE_KEY: &str = "user-products-storage";

/// Owner stamped onto listings in this single-user demo.
pub const DEMO_USER_ID: UserId = UserId::new(1);

/// A locally authored product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProduct {
    pub id: UserProductId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
}

/// Input for creating a listing. Id, owner, and creation time are stamped
/// by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserProduct {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
}

/// Partial update for a listing; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Persisted layout: a bare list under a `products` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserProductsState {
    products: Vec<UserProduct>,
}

/// Store for the user's self-authored listings.
pub struct UserProductsStore {
    state: UserProductsState,
    is_loading: bool,
    flusher: Flusher,
}

impl UserProductsStore {
    /// Load persisted listings from `storage`, or start fresh.
    ///
    /// As with the cart, read failures and corrupt blobs are treated as
    /// "no prior state".
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = match storage.get_item(USER_PRODUCTS_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<UserProductsState>(&raw) {
                Ok(state) => {
                    debug!(products = state.products.len(), "rehydrated user products");
                    state
                }
                Err(err) => {
                    warn!(error = %err, "persisted user products are corrupt; starting fresh");
                    UserProductsState::default()
                }
            },
            Ok(None) => UserProductsState::default(),
            Err(err) => {
                warn!(error = %err, "failed to read persisted user products; starting fresh");
                UserProductsState::default()
            }
        };

        Self {
            state,
            is_loading: false,
            flusher: Flusher::spawn(storage, USER_PRODUCTS_STORAGE_KEY),
        }
    }

    /// Create a listing: generate its id, stamp creation time and the demo
    /// owner, and append it. Returns the created listing.
    pub fn add_product(&mut self, data: NewUserProduct) -> Result<UserProduct, CommerceError> {
        self.is_loading = true;
        let product = UserProduct {
            id: UserProductId::generate(),
            title: data.title,
            description: data.description,
            price: data.price,
            category: data.category,
            image: data.image,
            created_at: Utc::now(),
            user_id: DEMO_USER_ID,
        };
        self.state.products.push(product.clone());

        let result = self.persist();
        self.is_loading = false;
        result.map(|()| product)
    }

    /// Merge `patch` into the listing with `id`. Returns `Ok(false)` — a
    /// no-op, not an error — if no such listing exists.
    pub fn update_product(
        &mut self,
        id: &UserProductId,
        patch: UserProductPatch,
    ) -> Result<bool, CommerceError> {
        self.is_loading = true;
        let found = match self.state.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                if let Some(title) = patch.title {
                    product.title = title;
                }
                if let Some(description) = patch.description {
                    product.description = description;
                }
                if let Some(price) = patch.price {
                    product.price = price;
                }
                if let Some(category) = patch.category {
                    product.category = category;
                }
                if let Some(image) = patch.image {
                    product.image = image;
                }
                true
            }
            None => false,
        };

        let result = self.persist();
        self.is_loading = false;
        result.map(|()| found)
    }

    /// Delete the listing with `id`. Returns `Ok(false)` if absent.
    pub fn delete_product(&mut self, id: &UserProductId) -> Result<bool, CommerceError> {
        self.is_loading = true;
        let len_before = self.state.products.len();
        self.state.products.retain(|p| &p.id != id);
        let removed = self.state.products.len() < len_before;

        let result = self.persist();
        self.is_loading = false;
        result.map(|()| removed)
    }

    /// Get a listing by id.
    pub fn get(&self, id: &UserProductId) -> Option<&UserProduct> {
        self.state.products.iter().find(|p| &p.id == id)
    }

    /// All listings owned by `user_id`, in creation order.
    pub fn products_for_user(&self, user_id: UserId) -> impl Iterator<Item = &UserProduct> {
        self.state
            .products
            .iter()
            .filter(move |p| p.user_id == user_id)
    }

    pub fn products(&self) -> &[UserProduct] {
        &self.state.products
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Wait for queued snapshots to reach the backend.
    pub async fn flush(&self) {
        self.flusher.flush().await;
    }

    fn persist(&self) -> Result<(), CommerceError> {
        let snapshot = serde_json::to_string(&self.state)?;
        self.flusher.write(snapshot);
        Ok(())
    }
}
