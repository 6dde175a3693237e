use std::sync::Arc;

use async_trait::async_trait;
use log::error;
use uuid::Uuid;

use crate::errors::Result;
use crate::products::resolve_unit_price;
use crate::storage::AppStorageRepositoryTrait;

use super::cart_constants::GUEST_CART_STORAGE_KEY;
use super::cart_errors::CartError;
use super::cart_model::{Cart, CartItem, GuestCartRecord, NewCartItem};
use super::cart_state::{reduce, CartAction, CartState};
use super::cart_traits::CartRepositoryTrait;

/// Guest-mode cart repository, backed by the on-device key-value store.
///
/// Each mutation loads the persisted record, applies the pure reducer, and
/// persists the result (items plus recomputed totals) as one record write,
/// so the cart is never observable in a partially-mutated state.
pub struct LocalCartRepository {
    store: Arc<dyn AppStorageRepositoryTrait>,
}

impl LocalCartRepository {
    pub fn new(store: Arc<dyn AppStorageRepositoryTrait>) -> Self {
        Self { store }
    }

    fn load_state(&self) -> Result<CartState> {
        let raw = self.store.get(GUEST_CART_STORAGE_KEY)?;
        let record = match raw {
            Some(raw) => match serde_json::from_str::<GuestCartRecord>(&raw) {
                Ok(record) => record,
                Err(e) => {
                    // A record we cannot read is unrecoverable at this scope;
                    // start over from an empty cart instead of failing every
                    // operation from here on.
                    error!("Discarding unreadable guest cart record: {}", e);
                    GuestCartRecord::default()
                }
            },
            None => GuestCartRecord::default(),
        };
        Ok(record.into())
    }

    async fn apply(&self, state: CartState, action: CartAction) -> Result<Cart> {
        let next = reduce(state, action);
        let record = GuestCartRecord::from(next);
        let raw = serde_json::to_string(&record)?;
        self.store.set(GUEST_CART_STORAGE_KEY, raw).await?;
        Ok(record.into_cart())
    }

    /// Builds the cart line for a product that is not in the cart yet.
    /// Guest carts cannot resolve catalog data on their own, so the caller
    /// must supply a product snapshot.
    fn build_item(new_item: &NewCartItem) -> Result<CartItem> {
        let snapshot = new_item
            .product
            .clone()
            .ok_or_else(|| CartError::MissingSnapshot(new_item.product_id.clone()))?;

        let (unit_price, original_unit_price) =
            resolve_unit_price(&snapshot, new_item.size_id.as_deref());

        let item = CartItem {
            id: Uuid::new_v4().to_string(),
            product_id: new_item.product_id.clone(),
            size_id: new_item.size_id.clone(),
            name: snapshot.name.clone(),
            quantity: new_item.quantity,
            unit_price,
            original_unit_price,
            is_favorite: false,
            product: Some(snapshot),
        };
        item.validate()?;
        Ok(item)
    }
}

#[async_trait]
impl CartRepositoryTrait for LocalCartRepository {
    async fn get(&self) -> Result<Cart> {
        let state = self.load_state()?;
        Ok(GuestCartRecord::from(state).into_cart())
    }

    async fn add(&self, new_item: NewCartItem) -> Result<Cart> {
        let state = self.load_state()?;

        let existing = state
            .items
            .iter()
            .find(|i| i.matches_identity(&new_item.product_id, new_item.size_id.as_deref()));

        // An existing line merges by identity and needs no snapshot; a new
        // line is built from the snapshot and must validate before it enters
        // the cart.
        let item = match existing {
            Some(line) => {
                let mut probe = line.clone();
                probe.quantity = new_item.quantity;
                probe
            }
            None => Self::build_item(&new_item)?,
        };

        self.apply(state, CartAction::Add(item)).await
    }

    async fn set_quantity(&self, item_id: &str, quantity: i64) -> Result<Cart> {
        let state = self.load_state()?;
        if super::cart_model::find_item(&state.items, item_id).is_none() {
            return Err(CartError::ItemNotFound(item_id.to_string()).into());
        }
        self.apply(
            state,
            CartAction::SetQuantity {
                item_id: item_id.to_string(),
                quantity,
            },
        )
        .await
    }

    async fn remove(&self, item_id: &str) -> Result<Cart> {
        let state = self.load_state()?;
        if super::cart_model::find_item(&state.items, item_id).is_none() {
            return Err(CartError::ItemNotFound(item_id.to_string()).into());
        }
        self.apply(
            state,
            CartAction::Remove {
                item_id: item_id.to_string(),
            },
        )
        .await
    }

    async fn clear(&self) -> Result<()> {
        // Delete the record outright so the next read starts from a fresh
        // empty cart rather than stale zeroed totals.
        self.store.remove(GUEST_CART_STORAGE_KEY).await
    }

    async fn count(&self) -> Result<i64> {
        let state = self.load_state()?;
        Ok(state.total_items)
    }
}
