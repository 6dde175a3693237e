use async_trait::async_trait;

use crate::api::ApiResult;

use super::orders_model::{NewOrder, Order};

/// Trait defining the contract for the order-creation backend.
#[async_trait]
pub trait OrderApiTrait: Send + Sync {
    async fn create_order(&self, new_order: &NewOrder) -> ApiResult<Order>;
}
