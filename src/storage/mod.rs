// Module declarations
pub(crate) mod storage_model;
pub(crate) mod storage_repository;

// Re-export the public interface
pub use storage_model::AppStorageEntry;
pub use storage_repository::{AppStorageRepository, AppStorageRepositoryTrait};
