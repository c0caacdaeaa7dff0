//! Write Session Use Case
//!
//! Turns a token plus a presented identity into the one [`SessionRecord`] the
//! cookie store writes. Deterministic for a given input, so repeated calls
//! produce the same cookies.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{Identity, SessionRecord};
use crate::error::{AuthError, AuthResult};

/// Write session input
pub struct WriteSessionInput {
    pub auth_token: Option<String>,
    pub user_data: Option<Identity>,
}

/// Write session use case
pub struct WriteSessionUseCase {
    config: Arc<AuthConfig>,
}

impl WriteSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: WriteSessionInput) -> AuthResult<SessionRecord> {
        let token = input
            .auth_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(AuthError::MissingField("pi_auth_token"))?;

        let identity = input.user_data.ok_or(AuthError::MissingField("user_data"))?;

        self.record_for(token, &identity)
    }

    /// Build the record for an already validated token
    ///
    /// The stored identity is the username, else the email. An identity with
    /// neither is refused: storing the admin address in its place would make
    /// the gate read the session as admin.
    pub fn record_for(&self, token: String, identity: &Identity) -> AuthResult<SessionRecord> {
        let email = identity
            .preferred_name()
            .ok_or(AuthError::MissingField("user_data"))?
            .to_string();

        let role = self.config.admin_policy().resolve_role(identity);

        tracing::info!(subject = %email, role = %role, "Session record issued");

        Ok(SessionRecord::new(
            token,
            email,
            role,
            self.config.session_ttl_chrono(),
        ))
    }
}
