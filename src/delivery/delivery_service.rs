use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;

use super::delivery_model::{resolve_fee, DeliveryCharge};
use super::delivery_traits::DeliveryApiTrait;

/// Service resolving the delivery fee for a checkout subtotal.
pub struct DeliveryService {
    api: Arc<dyn DeliveryApiTrait>,
}

impl DeliveryService {
    pub fn new(api: Arc<dyn DeliveryApiTrait>) -> Self {
        Self { api }
    }

    /// The active delivery-charge configuration, if any
    pub async fn get_delivery_charge(&self) -> Result<Option<DeliveryCharge>> {
        Ok(self.api.get_delivery_charge().await?)
    }

    /// Delivery fee owed on the given subtotal under the current
    /// configuration; free when no configuration exists
    pub async fn delivery_fee_for(&self, sub_total: Decimal) -> Result<Decimal> {
        let config = self.api.get_delivery_charge().await?;
        let fee = resolve_fee(sub_total, config.as_ref());
        debug!("Delivery fee for subtotal {}: {}", sub_total, fee);
        Ok(fee)
    }
}
