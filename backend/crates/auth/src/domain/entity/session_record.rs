//! Session Record Entity
//!
//! The cookie triplet is the session: there is no server-side table. A
//! [`SessionRecord`] is the one unit the writer emits, so the three cookies are
//! always produced together from the same values.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::value_object::user_role::UserRole;

/// Durable session entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    /// Opaque bearer token from the identity source (`auth_token`)
    pub token: String,
    /// Resolved display identity (`user_email`)
    pub email: String,
    /// Role resolved at write time (`user_role`)
    pub role: UserRole,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a new session record
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(token: String, email: String, role: UserRole, ttl: Duration) -> Self {
        Self::issued_at(token, email, role, Utc::now(), ttl)
    }

    /// Create a record issued at a fixed instant
    pub fn issued_at(
        token: String,
        email: String,
        role: UserRole,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            token,
            email,
            role,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    /// Lifetime in seconds, used as cookie Max-Age
    pub fn max_age_secs(&self) -> i64 {
        (self.expires_at - self.issued_at).num_seconds().max(0)
    }
}

/// What the request carried, after signature checks
///
/// The browser only sends name/value pairs back, so issue time is not
/// recoverable here; expiry is enforced by the cookie Max-Age.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl StoredSession {
    /// A session exists only if the token cookie does
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl From<&SessionRecord> for StoredSession {
    fn from(record: &SessionRecord) -> Self {
        Self {
            token: Some(record.token.clone()),
            email: Some(record.email.clone()),
            role: Some(record.role),
        }
    }
}
