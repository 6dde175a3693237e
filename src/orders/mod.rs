// Module declarations
pub(crate) mod orders_errors;
pub(crate) mod orders_model;
pub(crate) mod orders_service;
pub(crate) mod orders_traits;

// Re-export the public interface
pub use orders_model::{NewOrder, Order, OrderItem, PaymentMethod};
pub use orders_service::OrderService;
pub use orders_traits::OrderApiTrait;

// Re-export error types for convenience
pub use orders_errors::OrderError;
