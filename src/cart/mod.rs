// Module declarations
pub(crate) mod cart_aggregation;
pub(crate) mod cart_constants;
pub(crate) mod cart_errors;
pub(crate) mod cart_model;
pub(crate) mod cart_repository_local;
pub(crate) mod cart_repository_remote;
pub(crate) mod cart_service;
pub(crate) mod cart_state;
pub(crate) mod cart_traits;

#[cfg(test)]
pub(crate) mod tests;

// Re-export the public interface
pub use cart_aggregation::{
    default_delivery_fee, delivery_fee, total_price, total_quantity, total_savings,
};
pub use cart_constants::GUEST_CART_STORAGE_KEY;
pub use cart_model::{find_item, Cart, CartItem, GuestCartRecord, NewCartItem};
pub use cart_repository_local::LocalCartRepository;
pub use cart_repository_remote::RemoteCartRepository;
pub use cart_service::CartService;
pub use cart_state::{reduce, CartAction, CartState};
pub use cart_traits::{CartRepositoryTrait, CartServiceTrait};

// Re-export error types for convenience
pub use cart_errors::CartError;
