use thiserror::Error;

/// Custom error type for order operations
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    #[error("Order {order_id} was created but the cart could not be cleared: {message}")]
    CartClearFailed { order_id: String, message: String },
}
