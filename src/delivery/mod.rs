// Module declarations
pub(crate) mod delivery_model;
pub(crate) mod delivery_service;
pub(crate) mod delivery_traits;

// Re-export the public interface
pub use delivery_model::{resolve_fee, DeliveryCharge, DeliveryOption};
pub use delivery_service::DeliveryService;
pub use delivery_traits::DeliveryApiTrait;
