//! End-to-end persistence: both stores over the file backend, across
//! simulated process restarts.

use std::sync::Arc;

use rust_decimal_macros::dec;
use vend_commerce::prelude::*;
use vend_storage::{FileStore, KeyValueStore};

fn product(id: u64, price: rust_decimal::Decimal) -> Product {
    Product::new(ProductId::new(id), format!("Product {id}"), price)
}

#[tokio::test]
async fn cart_survives_restart_via_file_backend() {
    let dir = tempfile::tempdir().unwrap();

    // First "session": build up a cart and let the mirror catch up.
    {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
        let mut cart = CartStore::load(storage).await;
        cart.add_item(product(1, dec!(109.95)), 1);
        cart.add_item(product(2, dec!(22.30)), 3);
        cart.update_quantity(ProductId::new(2), 2);
        cart.flush().await;
    }

    // Second "session": rehydrate from disk.
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
    let cart = CartStore::load(storage).await;

    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), dec!(154.55));
    assert_eq!(cart.item_quantity(ProductId::new(2)), 2);
}

#[tokio::test]
async fn stores_persist_under_separate_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));

    let mut cart = CartStore::load(storage.clone()).await;
    cart.add_item(product(1, dec!(9.99)), 1);
    cart.flush().await;

    let mut listings = UserProductsStore::load(storage.clone()).await;
    let created = listings
        .add_product(NewUserProduct {
            title: "Hand-carved spoon".to_string(),
            description: "Walnut".to_string(),
            price: dec!(18.00),
            category: "crafts".to_string(),
            image: String::new(),
        })
        .unwrap();
    listings.flush().await;

    // Clearing the cart must not disturb the listings document.
    cart.clear();
    cart.flush().await;

    let listings_again = UserProductsStore::load(storage.clone()).await;
    assert_eq!(listings_again.get(&created.id), Some(&created));

    let cart_again = CartStore::load(storage).await;
    assert!(cart_again.is_empty());
}

#[tokio::test]
async fn tampered_cart_totals_are_recomputed_from_items() {
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));

    let mut cart = CartStore::load(storage.clone()).await;
    cart.add_item(product(1, dec!(10.00)), 2);
    cart.flush().await;

    // Tamper with the cached totals on disk, as an older schema or partial
    // write might have.
    let raw = storage.get_item("cart-storage").await.unwrap().unwrap();
    let mut blob: serde_json::Value = serde_json::from_str(&raw).unwrap();
    blob["totalPrice"] = serde_json::json!(0.01);
    storage
        .set_item("cart-storage", &blob.to_string())
        .await
        .unwrap();

    let rehydrated = CartStore::load(storage).await;
    assert_eq!(rehydrated.total_price(), dec!(20.00));
}

#[tokio::test]
async fn summary_matches_rehydrated_cart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
        let mut cart = CartStore::load(storage).await;
        cart.add_item(product(1, dec!(30.00)), 2);
        cart.flush().await;
    }

    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
    let cart = CartStore::load(storage).await;
    let summary = CartSummary::for_cart(cart.state());

    assert_eq!(summary.subtotal, dec!(60.00));
    assert_eq!(summary.shipping, rust_decimal::Decimal::ZERO);
    assert_eq!(summary.total, dec!(64.80));
}
