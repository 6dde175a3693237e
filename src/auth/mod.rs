// Module declarations
pub(crate) mod auth_model;

// Re-export the public interface
pub use auth_model::{AuthState, AuthStateProviderTrait, SessionAuthProvider};
