//! Admin Policy
//!
//! The single authority for "who is an admin". The session writer, the login
//! use case and the request gate all ask this type; none of them compare
//! against the admin email themselves.

use crate::domain::entity::{Identity, StoredSession};
use crate::domain::value_object::user_role::UserRole;

/// Default administrator identity
pub const DEFAULT_ADMIN_EMAIL: &str = "hohotamoz200@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPolicy {
    /// Lowercased admin identity
    admin_email: String,
}

impl Default for AdminPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_EMAIL)
    }
}

impl AdminPolicy {
    pub fn new(admin_email: impl AsRef<str>) -> Self {
        Self {
            admin_email: normalize(admin_email.as_ref()),
        }
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Case-insensitive match against the admin identity
    pub fn is_admin_name(&self, candidate: &str) -> bool {
        !candidate.trim().is_empty() && normalize(candidate) == self.admin_email
    }

    /// Role for a freshly presented identity: admin if either the username or
    /// the email names the admin
    pub fn resolve_role(&self, identity: &Identity) -> UserRole {
        let is_admin = [identity.username.as_deref(), identity.email.as_deref()]
            .into_iter()
            .flatten()
            .any(|name| self.is_admin_name(name));

        if is_admin {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }

    /// Role re-derived from cookies. `None` means unauthenticated.
    ///
    /// A stored `admin` role or a stored email naming the admin both count;
    /// the stored email is whatever [`AdminPolicy::resolve_role`] saw as the
    /// preferred name, so both paths reach the same answer.
    pub fn resolve_stored(&self, stored: &StoredSession) -> Option<UserRole> {
        if !stored.is_authenticated() {
            return None;
        }

        let role_says_admin = stored.role.is_some_and(|role| role.is_admin());
        let email_says_admin = stored
            .email
            .as_deref()
            .is_some_and(|email| self.is_admin_name(email));

        Some(if role_says_admin || email_says_admin {
            UserRole::Admin
        } else {
            UserRole::User
        })
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
