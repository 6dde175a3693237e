use async_trait::async_trait;

use crate::api::CartApi;
use crate::errors::Result;

use super::cart_model::{Cart, NewCartItem};
use super::cart_traits::CartRepositoryTrait;

/// Authenticated-mode cart repository, delegating to the backend.
///
/// No optimistic local mutation: the cart returned by the server after each
/// call is the only state callers see, so a failed call leaves them on the
/// last known-good cart.
pub struct RemoteCartRepository {
    api: CartApi,
}

impl RemoteCartRepository {
    pub fn new(api: CartApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CartRepositoryTrait for RemoteCartRepository {
    async fn get(&self) -> Result<Cart> {
        Ok(self.api.fetch_cart().await?)
    }

    async fn add(&self, new_item: NewCartItem) -> Result<Cart> {
        Ok(self.api.add_item(&new_item).await?)
    }

    async fn set_quantity(&self, item_id: &str, quantity: i64) -> Result<Cart> {
        // Zero-or-below means removal in every mode, whatever the backend
        // would make of a zero quantity.
        if quantity <= 0 {
            return Ok(self.api.delete_item(item_id).await?);
        }
        Ok(self.api.update_item(item_id, quantity).await?)
    }

    async fn remove(&self, item_id: &str) -> Result<Cart> {
        Ok(self.api.delete_item(item_id).await?)
    }

    async fn clear(&self) -> Result<()> {
        Ok(self.api.clear_cart().await?)
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.api.get_count().await?)
    }
}
