use thiserror::Error;

/// Custom error type for cart operations
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Invalid cart item: {0}")]
    InvalidItem(String),

    #[error("Item not found in cart: {0}")]
    ItemNotFound(String),

    #[error("Product details are required to add {0} to a guest cart")]
    MissingSnapshot(String),
}

/// Result type for cart operations
pub type Result<T> = std::result::Result<T, CartError>;
