//! Cart and user-product stores for the vend storefront demo.
//!
//! This crate is the state layer of a thin storefront client over a remote
//! catalog API. It owns two stores:
//!
//! - **Cart**: line items keyed by product id, clamped quantities, derived
//!   totals, persisted across restarts.
//! - **User products**: locally authored product listings with generated ids.
//!
//! Both stores keep their authoritative state in memory and mirror it into a
//! [`vend_storage::KeyValueStore`] through a background flusher; see the
//! store types for the consistency rules.
//!
//! # Example
//!
//! ```rust,ignore
//! use vend_commerce::prelude::*;
//!
//! let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(data_dir));
//! let mut cart = CartStore::load(storage).await;
//!
//! let product = Product::new(ProductId::new(1), "Fjallraven Backpack", dec!(109.95));
//! cart.add_item(product, 2);
//! assert_eq!(cart.total_items(), 2);
//!
//! cart.flush().await;
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod user_products;

pub use cart::{CartLineItem, CartState, CartStore, CartSummary};
pub use catalog::{Product, Rating};
pub use error::CommerceError;
pub use ids::{ProductId, UserId, UserProductId};
pub use user_products::{NewUserProduct, UserProduct, UserProductPatch, UserProductsStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartLineItem, CartState, CartStore, CartSummary};
    pub use crate::catalog::{Product, Rating};
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, UserId, UserProductId};
    pub use crate::user_products::{
        NewUserProduct, UserProduct, UserProductPatch, UserProductsStore,
    };
}
