use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use crate::auth::AuthStateProviderTrait;
use crate::errors::Result;

use super::cart_model::{Cart, NewCartItem};
use super::cart_traits::{CartRepositoryTrait, CartServiceTrait};

/// Service routing cart operations to the guest or authenticated backend.
///
/// The auth state is re-read on every operation, so a login or logout
/// between two calls is always honored; there is no cached mode.
///
/// Mutations hold `write_lock` for their whole read-modify-write, which
/// keeps two rapid quantity taps from both reading stale state and losing
/// one of the updates.
pub struct CartService {
    local: Arc<dyn CartRepositoryTrait>,
    remote: Arc<dyn CartRepositoryTrait>,
    auth: Arc<dyn AuthStateProviderTrait>,
    write_lock: Mutex<()>,
}

impl CartService {
    pub fn new(
        local: Arc<dyn CartRepositoryTrait>,
        remote: Arc<dyn CartRepositoryTrait>,
        auth: Arc<dyn AuthStateProviderTrait>,
    ) -> Self {
        Self {
            local,
            remote,
            auth,
            write_lock: Mutex::new(()),
        }
    }

    fn repository(&self) -> Arc<dyn CartRepositoryTrait> {
        if self.auth.auth_state().is_authenticated {
            Arc::clone(&self.remote)
        } else {
            Arc::clone(&self.local)
        }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self) -> Result<Cart> {
        self.repository().get().await
    }

    async fn add_item(&self, new_item: NewCartItem) -> Result<Cart> {
        new_item.validate()?;
        let _guard = self.write_lock.lock().await;
        debug!(
            "Adding product {} (size: {:?}) x{} to cart",
            new_item.product_id, new_item.size_id, new_item.quantity
        );
        self.repository().add(new_item).await
    }

    async fn set_item_quantity(&self, item_id: &str, quantity: i64) -> Result<Cart> {
        let _guard = self.write_lock.lock().await;
        debug!("Setting cart item {} quantity to {}", item_id, quantity);
        self.repository().set_quantity(item_id, quantity).await
    }

    async fn remove_item(&self, item_id: &str) -> Result<Cart> {
        let _guard = self.write_lock.lock().await;
        debug!("Removing cart item {}", item_id);
        self.repository().remove(item_id).await
    }

    async fn clear_cart(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        debug!("Clearing cart");
        self.repository().clear().await
    }

    async fn item_count(&self) -> Result<i64> {
        self.repository().count().await
    }

    /// Merges the guest cart into the remote cart after login.
    ///
    /// Each guest item is replayed through the remote add, which merges by
    /// `(product_id, size_id)`, and the guest record is deleted only once
    /// every item has been accepted. A remote failure leaves the guest
    /// record untouched so the merge can be retried without losing items.
    async fn merge_guest_cart(&self) -> Result<Cart> {
        let _guard = self.write_lock.lock().await;

        let guest = self.local.get().await?;
        if guest.items.is_empty() {
            return self.remote.get().await;
        }

        debug!("Merging {} guest cart item(s) into remote cart", guest.items.len());

        let mut cart = self.remote.get().await?;
        for item in guest.items {
            cart = self
                .remote
                .add(NewCartItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    size_id: item.size_id,
                    product: item.product,
                })
                .await?;
        }

        self.local.clear().await?;
        Ok(cart)
    }
}
