use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::api::ApiError;
use crate::cart::CartError;
use crate::orders::OrderError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the storefront core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cart operation failed: {0}")]
    Cart(#[from] CartError),

    #[error("Remote service call failed: {0}")]
    Api(#[from] ApiError),

    #[error("Order operation failed: {0}")]
    Order(#[from] OrderError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O operation failed: {0}")]
    Io(String),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(#[from] diesel::result::ConnectionError),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(#[from] r2d2::Error),

    #[error("Database query failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),
}

// Implement From for DieselError to Error directly
impl From<DieselError> for Error {
    fn from(err: DieselError) -> Self {
        Error::Database(DatabaseError::QueryFailed(err))
    }
}

impl From<r2d2::Error> for Error {
    fn from(e: r2d2::Error) -> Self {
        Error::Database(DatabaseError::PoolCreationFailed(e))
    }
}

impl From<diesel::result::ConnectionError> for Error {
    fn from(e: diesel::result::ConnectionError) -> Self {
        Error::Database(DatabaseError::ConnectionFailed(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
