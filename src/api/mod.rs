//! HTTP surface of the storefront backend.
//!
//! One shared [`ApiClient`] plus a typed wrapper per endpoint group. All
//! payloads are camelCase JSON; failures surface the backend's `message`
//! field when one is present.

pub(crate) mod cart;
pub(crate) mod client;
pub(crate) mod delivery;
pub(crate) mod errors;
pub(crate) mod orders;

pub use cart::CartApi;
pub use client::ApiClient;
pub use delivery::DeliveryApi;
pub use errors::{ApiError, ApiResult};
pub use orders::OrdersApi;
