use async_trait::async_trait;

use crate::orders::{NewOrder, Order, OrderApiTrait};

use super::client::ApiClient;
use super::errors::ApiResult;

/// Wrapper over the order-creation endpoint.
#[derive(Clone)]
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderApiTrait for OrdersApi {
    async fn create_order(&self, new_order: &NewOrder) -> ApiResult<Order> {
        self.client.post_json("/orders", new_order).await
    }
}
