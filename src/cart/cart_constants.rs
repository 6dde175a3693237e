/// Key under which the guest cart record is persisted on device
pub const GUEST_CART_STORAGE_KEY: &str = "guest_cart";
