use async_trait::async_trait;

use crate::api::ApiResult;

use super::delivery_model::DeliveryCharge;

/// Trait defining the contract for the delivery-charge configuration source.
#[async_trait]
pub trait DeliveryApiTrait: Send + Sync {
    /// The active delivery-charge rule, or `None` when the backend has none
    /// configured.
    async fn get_delivery_charge(&self) -> ApiResult<Option<DeliveryCharge>>;
}
