use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Snapshot of the session's authentication state.
///
/// The cart layer re-reads this on every operation so that a login or logout
/// between two taps is always picked up; nothing downstream caches the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_guest: bool,
}

impl AuthState {
    pub fn guest() -> Self {
        Self {
            is_authenticated: false,
            is_guest: true,
        }
    }

    pub fn authenticated() -> Self {
        Self {
            is_authenticated: true,
            is_guest: false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::guest()
    }
}

/// Trait providing the current authentication state to the cart layer.
pub trait AuthStateProviderTrait: Send + Sync {
    fn auth_state(&self) -> AuthState;
}

/// Session-held auth state, updated by the app's auth flow on login/logout.
#[derive(Debug, Default)]
pub struct SessionAuthProvider {
    state: RwLock<AuthState>,
}

impl SessionAuthProvider {
    pub fn new(state: AuthState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        let next = if authenticated {
            AuthState::authenticated()
        } else {
            AuthState::guest()
        };
        *self.state.write().unwrap() = next;
    }
}

impl AuthStateProviderTrait for SessionAuthProvider {
    fn auth_state(&self) -> AuthState {
        *self.state.read().unwrap()
    }
}
