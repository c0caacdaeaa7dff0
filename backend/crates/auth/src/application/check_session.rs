//! Check Session Use Case
//!
//! Read-only view of the cookie session, for client polling.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::StoredSession;
use crate::domain::value_object::user_role::UserRole;

/// Session status output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl SessionStatus {
    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            email: None,
            role: None,
        }
    }
}

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AuthConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Without a token cookie the session is absent, whatever else is stored
    pub fn execute(&self, stored: &StoredSession) -> SessionStatus {
        match self.config.admin_policy().resolve_stored(stored) {
            Some(role) => SessionStatus {
                authenticated: true,
                email: stored.email.clone(),
                role: Some(role),
            },
            None => SessionStatus::unauthenticated(),
        }
    }
}
