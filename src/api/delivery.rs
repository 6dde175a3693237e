use async_trait::async_trait;

use crate::delivery::{DeliveryApiTrait, DeliveryCharge};

use super::client::ApiClient;
use super::errors::ApiResult;

/// Wrapper over the delivery-charge configuration endpoint.
#[derive(Clone)]
pub struct DeliveryApi {
    client: ApiClient,
}

impl DeliveryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeliveryApiTrait for DeliveryApi {
    /// The server-side delivery-charge rule; `None` when none is configured.
    async fn get_delivery_charge(&self) -> ApiResult<Option<DeliveryCharge>> {
        self.client.get_optional("/config/delivery-charge").await
    }
}
