use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an order leaves the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Delivery,
    Pickup,
}

/// Server-configured delivery-charge rule: a flat `amount` below the
/// free-delivery threshold `min_purchase_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCharge {
    pub amount: Decimal,
    pub min_purchase_amount: Decimal,
}

impl DeliveryCharge {
    pub fn fee_for(&self, sub_total: Decimal) -> Decimal {
        if sub_total >= self.min_purchase_amount {
            Decimal::ZERO
        } else {
            self.amount
        }
    }
}

/// Delivery fee for a subtotal under an optional configuration.
///
/// Fail-open: no configuration means free delivery, never an error.
pub fn resolve_fee(sub_total: Decimal, config: Option<&DeliveryCharge>) -> Decimal {
    match config {
        Some(charge) => charge.fee_for(sub_total),
        None => Decimal::ZERO,
    }
}
