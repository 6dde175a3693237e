//! Cart repository and service traits.
//!
//! These traits define the contract for cart operations without any
//! storage- or transport-specific types: the guest (on-device) and
//! authenticated (remote) implementations are interchangeable behind
//! `CartRepositoryTrait`.

use async_trait::async_trait;

use super::cart_model::{Cart, NewCartItem};
use crate::errors::Result;

/// Trait defining the contract for one cart backend.
///
/// Every operation returns the resulting cart so callers never have to
/// re-derive state; for the remote implementation that cart is the server's
/// authoritative copy.
#[async_trait]
pub trait CartRepositoryTrait: Send + Sync {
    /// The current cart; an empty cart when nothing has been added yet.
    async fn get(&self) -> Result<Cart>;

    /// Adds a product to the cart, merging with an existing
    /// `(product_id, size_id)` line when one exists.
    async fn add(&self, new_item: NewCartItem) -> Result<Cart>;

    /// Sets an item's quantity to an exact value. Zero or below removes the
    /// item.
    async fn set_quantity(&self, item_id: &str, quantity: i64) -> Result<Cart>;

    /// Removes an item by id.
    async fn remove(&self, item_id: &str) -> Result<Cart>;

    /// Empties the cart. Idempotent.
    async fn clear(&self) -> Result<()>;

    /// Number of units in the cart (sum of quantities).
    async fn count(&self) -> Result<i64>;
}

/// Trait defining the contract for the cart service consumed by the app.
///
/// The service decides per call which repository serves the operation, based
/// on the session's auth state at that moment.
#[async_trait]
pub trait CartServiceTrait: Send + Sync {
    async fn get_cart(&self) -> Result<Cart>;

    async fn add_item(&self, new_item: NewCartItem) -> Result<Cart>;

    async fn set_item_quantity(&self, item_id: &str, quantity: i64) -> Result<Cart>;

    async fn remove_item(&self, item_id: &str) -> Result<Cart>;

    async fn clear_cart(&self) -> Result<()>;

    async fn item_count(&self) -> Result<i64>;

    /// Replays the guest cart into the remote cart after login, then deletes
    /// the guest record. See the service implementation for the exact
    /// semantics.
    async fn merge_guest_cart(&self) -> Result<Cart>;
}
