use std::sync::Arc;

use log::{debug, error};

use crate::cart::CartServiceTrait;
use crate::delivery::DeliveryOption;
use crate::errors::{Error, Result};

use super::orders_errors::OrderError;
use super::orders_model::{NewOrder, Order, OrderItem, PaymentMethod};
use super::orders_traits::OrderApiTrait;

/// Service turning the current cart into an order.
pub struct OrderService {
    api: Arc<dyn OrderApiTrait>,
    cart_service: Arc<dyn CartServiceTrait>,
}

impl OrderService {
    pub fn new(api: Arc<dyn OrderApiTrait>, cart_service: Arc<dyn CartServiceTrait>) -> Self {
        Self { api, cart_service }
    }

    /// Creates an order from the current cart, then clears the cart.
    ///
    /// The cart is cleared only after the backend confirms the order. If the
    /// clear fails afterwards, the order stands; the error carries its id so
    /// the caller can still confirm the purchase to the user.
    pub async fn place_order(
        &self,
        delivery_address: Option<String>,
        delivery_option: DeliveryOption,
        payment_method: PaymentMethod,
    ) -> Result<Order> {
        let cart = self.cart_service.get_cart().await?;
        if cart.items.is_empty() {
            return Err(OrderError::EmptyCart.into());
        }

        let new_order = NewOrder {
            items: cart.items.iter().map(OrderItem::from).collect(),
            delivery_address,
            delivery_option,
            payment_method,
        };

        debug!("Placing order with {} line(s)", new_order.items.len());
        let order = self.api.create_order(&new_order).await.map_err(Error::from)?;

        if let Err(e) = self.cart_service.clear_cart().await {
            error!("Order {} created but clearing the cart failed: {}", order.id, e);
            return Err(OrderError::CartClearFailed {
                order_id: order.id.clone(),
                message: e.to_string(),
            }
            .into());
        }

        Ok(order)
    }
}
