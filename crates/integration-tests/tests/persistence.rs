//! Durable store behavior as seen through the cart.
//!
//! Covers the blob format on disk, degradation on malformed data, and the
//! last-writer-wins semantics between two managers sharing a store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use cartkeeper_core::{Cart, ProductId};
use cartkeeper_integration_tests::{FakeShop, RecordingNotifier};
use cartkeeper_manager::store::{DurableStore, FileStore};
use cartkeeper_manager::{CART_STORE_KEY, CartManager};

fn id(raw: i64) -> ProductId {
    ProductId::new(raw)
}

async fn manager_over(
    store: Arc<FileStore>,
    shop: &Arc<FakeShop>,
    notifier: &Arc<RecordingNotifier>,
) -> CartManager {
    CartManager::load(store, shop.clone(), shop.clone(), notifier.clone()).await
}

#[tokio::test]
async fn test_persisted_blob_is_a_plain_line_item_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    let shop = Arc::new(FakeShop::seeded(&[(1, 5)]));
    let notifier = Arc::new(RecordingNotifier::new());

    let mut manager = manager_over(store.clone(), &shop, &notifier).await;
    manager.add_product(id(1)).await.unwrap();
    manager.add_product(id(1)).await.unwrap();

    let bytes = store.read(CART_STORE_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let lines = value.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[0]["amount"], 2);
    assert!(lines[0]["title"].is_string());
    assert!(lines[0]["imageUrl"].is_string());
    assert!(lines[0].get("price").is_some());
}

#[tokio::test]
async fn test_reload_reproduces_cart_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    let shop = Arc::new(FakeShop::seeded(&[(1, 5), (2, 5)]));
    let notifier = Arc::new(RecordingNotifier::new());

    let mut manager = manager_over(store.clone(), &shop, &notifier).await;
    manager.add_product(id(1)).await.unwrap();
    manager.add_product(id(2)).await.unwrap();
    manager.update_product_amount(id(1), 4).await.unwrap();
    let committed = manager.snapshot();
    drop(manager);

    let reloaded = manager_over(store, &shop, &notifier).await;
    assert_eq!(reloaded.snapshot(), committed);
}

#[tokio::test]
async fn test_malformed_blob_on_disk_degrades_to_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    store
        .write(CART_STORE_KEY, b"{\"definitely\": \"not a cart\"")
        .await
        .unwrap();

    let shop = Arc::new(FakeShop::seeded(&[(1, 5)]));
    let notifier = Arc::new(RecordingNotifier::new());
    let mut manager = manager_over(store.clone(), &shop, &notifier).await;

    assert!(manager.snapshot().is_empty());

    // The cart is usable and the next commit replaces the bad blob.
    manager.add_product(id(1)).await.unwrap();
    let bytes = store.read(CART_STORE_KEY).await.unwrap().unwrap();
    let persisted: Cart = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(persisted, manager.snapshot());
}

#[tokio::test]
async fn test_last_writer_wins_between_managers() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path()));
    let shop = Arc::new(FakeShop::seeded(&[(1, 5), (2, 5)]));
    let notifier = Arc::new(RecordingNotifier::new());

    // Both managers load the same (empty) persisted state.
    let mut first = manager_over(store.clone(), &shop, &notifier).await;
    let mut second = manager_over(store.clone(), &shop, &notifier).await;

    first.add_product(id(1)).await.unwrap();
    second.add_product(id(2)).await.unwrap();

    // No coordination between processes: the second commit replaced the
    // first one wholesale.
    let bytes = store.read(CART_STORE_KEY).await.unwrap().unwrap();
    let persisted: Cart = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(persisted, second.snapshot());
    assert!(!persisted.contains(id(1)));
}
