use serde::{Deserialize, Serialize};

use crate::cart::{Cart, NewCartItem};

use super::client::ApiClient;
use super::errors::ApiResult;

/// Typed wrapper over the authenticated cart endpoints.
///
/// Every mutating call returns the server's cart, which callers treat as
/// authoritative.
#[derive(Clone)]
pub struct CartApi {
    client: ApiClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemRequest<'a> {
    product_id: &'a str,
    quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateItemRequest {
    quantity: i64,
}

#[derive(Deserialize)]
struct CountResponse {
    count: i64,
}

#[derive(Deserialize)]
struct Ack {
    #[serde(default)]
    #[allow(dead_code)]
    success: bool,
}

impl CartApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch_cart(&self) -> ApiResult<Cart> {
        self.client.get_json("/cart").await
    }

    pub async fn add_item(&self, new_item: &NewCartItem) -> ApiResult<Cart> {
        // The backend resolves catalog data itself; the snapshot is a
        // guest-cart concern and stays local.
        let payload = AddItemRequest {
            product_id: &new_item.product_id,
            quantity: new_item.quantity,
            size_id: new_item.size_id.as_deref(),
        };
        self.client.post_json("/cart/items", &payload).await
    }

    pub async fn update_item(&self, item_id: &str, quantity: i64) -> ApiResult<Cart> {
        let payload = UpdateItemRequest { quantity };
        self.client
            .put_json(&format!("/cart/items/{}", item_id), &payload)
            .await
    }

    pub async fn delete_item(&self, item_id: &str) -> ApiResult<Cart> {
        self.client
            .delete_json(&format!("/cart/items/{}", item_id))
            .await
    }

    pub async fn clear_cart(&self) -> ApiResult<()> {
        let _ack: Ack = self.client.delete_json("/cart").await?;
        Ok(())
    }

    pub async fn get_count(&self) -> ApiResult<i64> {
        let response: CountResponse = self.client.get_json("/cart/count").await?;
        Ok(response.count)
    }
}
