//! Service-level tests for the cart reconciliation layer.
//!
//! The guest path runs against the real local repository over an in-memory
//! store; the authenticated path runs against a fake remote repository that
//! mimics the backend's merge semantics.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::Mutex as AsyncMutex;

use crate::auth::{AuthStateProviderTrait, SessionAuthProvider};
use crate::cart::{
    total_price, total_quantity, Cart, CartError, CartItem, CartRepositoryTrait, CartService,
    CartServiceTrait, GuestCartRecord, LocalCartRepository, NewCartItem, GUEST_CART_STORAGE_KEY,
};
use crate::errors::{Error, Result};
use crate::products::{ProductSize, ProductSnapshot};
use crate::storage::AppStorageRepositoryTrait;

/// In-memory stand-in for the on-device store.
#[derive(Default)]
struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl AppStorageRepositoryTrait for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.records.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Fake backend cart with the server's merge-by-identity behavior.
#[derive(Default)]
struct FakeRemoteRepository {
    items: AsyncMutex<Vec<CartItem>>,
}

impl FakeRemoteRepository {
    async fn cart(&self) -> Cart {
        Cart {
            items: self.items.lock().await.clone(),
            ..Cart::default()
        }
    }
}

#[async_trait]
impl CartRepositoryTrait for FakeRemoteRepository {
    async fn get(&self) -> Result<Cart> {
        Ok(self.cart().await)
    }

    async fn add(&self, new_item: NewCartItem) -> Result<Cart> {
        {
            let mut items = self.items.lock().await;
            let new_id = format!("srv-{}", items.len() + 1);
            let existing = items
                .iter_mut()
                .find(|i| i.matches_identity(&new_item.product_id, new_item.size_id.as_deref()));
            match existing {
                Some(line) => line.quantity += new_item.quantity,
                None => items.push(CartItem {
                    id: new_id,
                    product_id: new_item.product_id,
                    size_id: new_item.size_id,
                    name: "From catalog".to_string(),
                    quantity: new_item.quantity,
                    unit_price: dec!(50),
                    original_unit_price: None,
                    is_favorite: false,
                    product: None,
                }),
            }
        }
        Ok(self.cart().await)
    }

    async fn set_quantity(&self, item_id: &str, quantity: i64) -> Result<Cart> {
        {
            let mut items = self.items.lock().await;
            if quantity <= 0 {
                items.retain(|i| i.id != item_id);
            } else if let Some(line) = items.iter_mut().find(|i| i.id == item_id) {
                line.quantity = quantity;
            }
        }
        Ok(self.cart().await)
    }

    async fn remove(&self, item_id: &str) -> Result<Cart> {
        self.items.lock().await.retain(|i| i.id != item_id);
        Ok(self.cart().await)
    }

    async fn clear(&self) -> Result<()> {
        self.items.lock().await.clear();
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        Ok(total_quantity(&self.items.lock().await))
    }
}

struct Harness {
    service: CartService,
    store: Arc<MemoryStore>,
    remote: Arc<FakeRemoteRepository>,
    auth: Arc<SessionAuthProvider>,
}

fn harness() -> Harness {
    let store = Arc::new(MemoryStore::default());
    let remote = Arc::new(FakeRemoteRepository::default());
    let auth = Arc::new(SessionAuthProvider::default());
    let service = CartService::new(
        Arc::new(LocalCartRepository::new(store.clone())),
        remote.clone(),
        auth.clone() as Arc<dyn AuthStateProviderTrait>,
    );
    Harness {
        service,
        store,
        remote,
        auth,
    }
}

fn snapshot(product_id: &str, sale: Decimal, mrp: Option<Decimal>) -> ProductSnapshot {
    ProductSnapshot {
        id: product_id.to_string(),
        name: format!("Product {}", product_id),
        sale_price: Some(sale),
        mrp,
        sizes: vec![],
    }
}

fn new_item(product_id: &str, quantity: i64, size_id: Option<&str>) -> NewCartItem {
    NewCartItem {
        product_id: product_id.to_string(),
        quantity,
        size_id: size_id.map(str::to_string),
        product: Some(snapshot(product_id, dec!(66), Some(dec!(72)))),
    }
}

fn stored_record(store: &MemoryStore) -> Option<GuestCartRecord> {
    store
        .get(GUEST_CART_STORAGE_KEY)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}

#[tokio::test]
async fn test_guest_add_merges_by_product_and_size() {
    let h = harness();

    let cart = h.service.add_item(new_item("p1", 2, None)).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(total_price(&cart.items), dec!(132));

    // Same pair again: one line, summed quantity
    let cart = h.service.add_item(new_item("p1", 3, None)).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 5);

    // A different size is a different identity
    let cart = h.service.add_item(new_item("p1", 1, Some("s1"))).await.unwrap();
    assert_eq!(cart.items.len(), 2);
}

#[tokio::test]
async fn test_guest_add_without_snapshot_fails_for_new_product() {
    let h = harness();

    let mut bare = new_item("p1", 1, None);
    bare.product = None;
    let result = h.service.add_item(bare).await;
    assert!(matches!(
        result,
        Err(Error::Cart(CartError::MissingSnapshot(_)))
    ));
    // Nothing was persisted
    assert!(stored_record(&h.store).is_none());

    // Once the line exists, merging more of it needs no snapshot
    h.service.add_item(new_item("p1", 1, None)).await.unwrap();
    let mut bare = new_item("p1", 4, None);
    bare.product = None;
    let cart = h.service.add_item(bare).await.unwrap();
    assert_eq!(cart.items[0].quantity, 5);
}

#[tokio::test]
async fn test_guest_update_zero_or_negative_removes() {
    for quantity in [0, -5] {
        let h = harness();
        let cart = h.service.add_item(new_item("p1", 2, None)).await.unwrap();
        let item_id = cart.items[0].id.clone();

        let cart = h.service.set_item_quantity(&item_id, quantity).await.unwrap();
        assert!(cart.items.is_empty());

        let record = stored_record(&h.store).unwrap();
        assert_eq!(record.total_items, 0);
        assert_eq!(record.sub_total, Decimal::ZERO);
    }
}

#[tokio::test]
async fn test_guest_update_sets_exact_quantity_and_persists_totals() {
    let h = harness();
    let cart = h.service.add_item(new_item("p1", 2, None)).await.unwrap();
    let item_id = cart.items[0].id.clone();

    let cart = h.service.set_item_quantity(&item_id, 7).await.unwrap();
    assert_eq!(cart.items[0].quantity, 7);

    let record = stored_record(&h.store).unwrap();
    assert_eq!(record.total_items, total_quantity(&record.items));
    assert_eq!(record.sub_total, total_price(&record.items));
    assert_eq!(record.total_items, 7);
}

#[tokio::test]
async fn test_guest_unknown_item_errors_without_corrupting_state() {
    let h = harness();
    h.service.add_item(new_item("p1", 2, None)).await.unwrap();

    let result = h.service.set_item_quantity("missing", 3).await;
    assert!(matches!(result, Err(Error::Cart(CartError::ItemNotFound(_)))));

    let result = h.service.remove_item("missing").await;
    assert!(matches!(result, Err(Error::Cart(CartError::ItemNotFound(_)))));

    let record = stored_record(&h.store).unwrap();
    assert_eq!(record.total_items, 2);
}

#[tokio::test]
async fn test_guest_clear_deletes_record_and_is_idempotent() {
    let h = harness();
    h.service.add_item(new_item("p1", 2, None)).await.unwrap();
    assert!(stored_record(&h.store).is_some());

    h.service.clear_cart().await.unwrap();
    assert!(stored_record(&h.store).is_none());
    assert_eq!(h.service.item_count().await.unwrap(), 0);

    // Second clear must not fail
    h.service.clear_cart().await.unwrap();
    assert!(h.service.get_cart().await.unwrap().items.is_empty());
}

#[tokio::test]
async fn test_mode_is_reevaluated_on_every_operation() {
    let h = harness();

    h.service.add_item(new_item("p1", 2, None)).await.unwrap();
    assert_eq!(h.service.item_count().await.unwrap(), 2);

    // After login the same service must read the remote cart
    h.auth.set_authenticated(true);
    assert_eq!(h.service.item_count().await.unwrap(), 0);
    h.service.add_item(new_item("p2", 1, None)).await.unwrap();
    assert_eq!(h.remote.count().await.unwrap(), 1);

    // Logging out surfaces the untouched guest cart again
    h.auth.set_authenticated(false);
    assert_eq!(h.service.item_count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_merge_guest_cart_replays_and_deletes_guest_record() {
    let h = harness();

    // Remote already has 3 of p1; guest has 2 of p1 and 1 of p2
    h.remote.add(new_item("p1", 3, None)).await.unwrap();
    h.service.add_item(new_item("p1", 2, None)).await.unwrap();
    h.service.add_item(new_item("p2", 1, None)).await.unwrap();

    h.auth.set_authenticated(true);
    let cart = h.service.merge_guest_cart().await.unwrap();

    let p1 = cart.items.iter().find(|i| i.product_id == "p1").unwrap();
    assert_eq!(p1.quantity, 5);
    assert_eq!(cart.items.len(), 2);
    assert!(stored_record(&h.store).is_none());
}

#[tokio::test]
async fn test_merge_with_empty_guest_cart_is_a_fetch() {
    let h = harness();
    h.remote.add(new_item("p1", 3, None)).await.unwrap();

    h.auth.set_authenticated(true);
    let cart = h.service.merge_guest_cart().await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 3);
}

#[tokio::test]
async fn test_guest_sized_item_prices_from_size_entry() {
    let h = harness();

    let mut item = new_item("p1", 2, Some("s1"));
    item.product = Some(ProductSnapshot {
        id: "p1".to_string(),
        name: "Farm Eggs".to_string(),
        sale_price: Some(dec!(90)),
        mrp: Some(dec!(99)),
        sizes: vec![
            ProductSize {
                id: "s1".to_string(),
                label: Some("6 pack".to_string()),
                sale_price: Some(dec!(48)),
                mrp: Some(dec!(54)),
                sort_order: Some(1),
            },
            ProductSize {
                id: "s2".to_string(),
                label: Some("12 pack".to_string()),
                sale_price: Some(dec!(90)),
                mrp: Some(dec!(99)),
                sort_order: Some(2),
            },
        ],
    });

    let cart = h.service.add_item(item).await.unwrap();
    assert_eq!(cart.items[0].unit_price, dec!(48));
    assert_eq!(cart.items[0].original_unit_price, Some(dec!(54)));

    let record = stored_record(&h.store).unwrap();
    assert_eq!(record.sub_total, dec!(96));
}

#[tokio::test]
async fn test_corrupt_guest_record_resets_to_empty() {
    let h = harness();
    h.store
        .set(GUEST_CART_STORAGE_KEY, "not json".to_string())
        .await
        .unwrap();

    assert!(h.service.get_cart().await.unwrap().items.is_empty());
    let cart = h.service.add_item(new_item("p1", 1, None)).await.unwrap();
    assert_eq!(cart.items.len(), 1);
}

#[tokio::test]
async fn test_rapid_mutations_are_serialized() {
    let h = harness();
    let service = Arc::new(h.service);

    // Two concurrent add bursts for the same identity must both land
    let mut handles = Vec::new();
    for _ in 0..2 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..5 {
                service.add_item(new_item("p1", 1, None)).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let cart = service.get_cart().await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 10);
}
