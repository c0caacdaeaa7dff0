//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::policy::{AdminPolicy, DEFAULT_ADMIN_EMAIL};
use crate::domain::route_policy::RoutePolicy;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Bearer token cookie
    pub token_cookie_name: String,
    /// Resolved identity cookie
    pub email_cookie_name: String,
    /// Role cookie
    pub role_cookie_name: String,
    /// Intermediate OAuth bundle cookie (script-readable)
    pub bundle_cookie_name: String,
    /// Secret key for HMAC signing of durable cookies (32 bytes)
    pub session_secret: [u8; 32],
    /// Durable cookie lifetime (7 days)
    pub session_ttl: Duration,
    /// Intermediate bundle lifetime (1 hour)
    pub bundle_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// The single administrator identity
    pub admin_email: String,
    /// Login page
    pub login_path: String,
    /// Home page
    pub home_path: String,
    /// Session bridge page the callback hands off to
    pub processing_path: String,
    /// Route classification table for the request gate
    pub routes: RoutePolicy,
    /// Login endpoints check tokens against the wallet network when set;
    /// when unset they run in sandbox mode and trust the token as presented
    pub require_real_verification: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_cookie_name: "auth_token".to_string(),
            email_cookie_name: "user_email".to_string(),
            role_cookie_name: "user_role".to_string(),
            bundle_cookie_name: "supabase_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            bundle_ttl: Duration::from_secs(3600),           // 1 hour
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            login_path: "/auth/login".to_string(),
            home_path: "/".to_string(),
            processing_path: "/auth/processing".to_string(),
            routes: RoutePolicy::default(),
            require_real_verification: true,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie, sandbox login)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            require_real_verification: false,
            ..Self::with_random_secret()
        }
    }

    /// The admin authority built from this config
    pub fn admin_policy(&self) -> AdminPolicy {
        AdminPolicy::new(&self.admin_email)
    }

    /// Session TTL as a chrono duration
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or_else(|_| chrono::Duration::days(7))
    }

    /// Attributes for one of the three durable cookies
    pub fn durable_cookie(&self, name: &str) -> CookieConfig {
        CookieConfig {
            name: name.to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs() as i64),
        }
    }

    /// Attributes for the intermediate bundle; page scripts must read it
    pub fn bundle_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.bundle_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: false,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.bundle_ttl.as_secs() as i64),
        }
    }
}
