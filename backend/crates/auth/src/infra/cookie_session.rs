//! Cookie Session Store
//!
//! Reads and writes the durable cookie triplet and the intermediate bundle.
//! Durable values are HMAC-signed with the session secret; a value whose
//! signature does not verify reads as absent.

use axum_extra::extract::CookieJar;
use platform::crypto::{sign_value, verify_signed_value};

use crate::application::config::AuthConfig;
use crate::domain::entity::{OAuthBundle, SessionRecord, StoredSession};
use crate::domain::repository::ForwardedCookies;
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthResult;

/// Cookie-backed session store
pub struct CookieSessionStore<'a> {
    config: &'a AuthConfig,
}

impl<'a> CookieSessionStore<'a> {
    pub fn new(config: &'a AuthConfig) -> Self {
        Self { config }
    }

    /// Write all three durable cookies from one record
    pub fn write(&self, jar: CookieJar, record: &SessionRecord) -> CookieJar {
        let max_age = record.max_age_secs();

        [
            (&self.config.token_cookie_name, record.token.as_str()),
            (&self.config.email_cookie_name, record.email.as_str()),
            (&self.config.role_cookie_name, record.role.code()),
        ]
        .into_iter()
        .fold(jar, |jar, (name, value)| {
            let mut cookie = self.config.durable_cookie(name);
            cookie.max_age_secs = Some(max_age);
            jar.add(cookie.build(self.sign(name, value)))
        })
    }

    /// Read the triplet back, dropping anything with a bad signature
    pub fn read(&self, jar: &CookieJar) -> StoredSession {
        let token = self.read_signed(jar, &self.config.token_cookie_name);
        let email = self.read_signed(jar, &self.config.email_cookie_name);
        let role = self
            .read_signed(jar, &self.config.role_cookie_name)
            .and_then(|code| UserRole::from_code(&code));

        StoredSession { token, email, role }
    }

    /// Expire the triplet and any leftover bundle
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        [
            &self.config.token_cookie_name,
            &self.config.email_cookie_name,
            &self.config.role_cookie_name,
        ]
        .into_iter()
        .fold(jar, |jar, name| {
            jar.add(self.config.durable_cookie(name).removal())
        })
        .add(self.config.bundle_cookie().removal())
    }

    /// Write the intermediate bundle
    pub fn write_bundle(&self, jar: CookieJar, bundle: &OAuthBundle) -> AuthResult<CookieJar> {
        let value = bundle.encode()?;
        Ok(jar.add(self.config.bundle_cookie().build(value)))
    }

    /// Take the intermediate bundle out of the jar.
    ///
    /// The returned jar always carries the bundle's removal, whether or not a
    /// bundle was present, so a second read finds nothing.
    pub fn take_bundle(&self, jar: CookieJar) -> (CookieJar, Option<String>) {
        let raw = jar
            .get(&self.config.bundle_cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty());

        (jar.add(self.config.bundle_cookie().removal()), raw)
    }

    fn sign(&self, name: &str, value: &str) -> String {
        sign_value(&self.config.session_secret, name, value)
    }

    fn read_signed(&self, jar: &CookieJar, name: &str) -> Option<String> {
        let raw = jar.get(name)?;
        let value = verify_signed_value(&self.config.session_secret, name, raw.value());
        if value.is_none() {
            tracing::debug!(cookie = name, "Ignoring cookie with invalid signature");
        }
        value.filter(|v| !v.is_empty())
    }
}

/// Name/value pairs of the inbound request, for forwarding upstream
pub fn forwarded_cookies(jar: &CookieJar) -> ForwardedCookies {
    jar.iter()
        .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;
    use chrono::Duration;

    use crate::domain::entity::ProviderTokens;

    fn config() -> AuthConfig {
        AuthConfig {
            session_secret: [42u8; 32],
            ..AuthConfig::default()
        }
    }

    fn record(email: &str, role: UserRole) -> SessionRecord {
        SessionRecord::new("tok123".to_string(), email.to_string(), role, Duration::days(7))
    }

    /// Simulate the browser: carry the cookies set on one response into the
    /// next request's jar
    fn round_trip(jar: CookieJar) -> CookieJar {
        jar.iter()
            .filter(|cookie| !cookie.value().is_empty())
            .fold(CookieJar::new(), |next, cookie| {
                next.add(Cookie::new(
                    cookie.name().to_string(),
                    cookie.value().to_string(),
                ))
            })
    }

    #[test]
    fn test_write_then_read() {
        let config = config();
        let store = CookieSessionStore::new(&config);

        let jar = store.write(CookieJar::new(), &record("pioneer", UserRole::User));
        let stored = store.read(&round_trip(jar));

        assert_eq!(stored.token.as_deref(), Some("tok123"));
        assert_eq!(stored.email.as_deref(), Some("pioneer"));
        assert_eq!(stored.role, Some(UserRole::User));
    }

    #[test]
    fn test_write_sets_all_three_cookies() {
        let config = config();
        let store = CookieSessionStore::new(&config);

        let jar = store.write(CookieJar::new(), &record("pioneer", UserRole::User));
        for name in ["auth_token", "user_email", "user_role"] {
            let cookie = jar.get(name).expect("cookie written");
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.path(), Some("/"));
        }
    }

    #[test]
    fn test_forged_role_ignored() {
        let config = config();
        let store = CookieSessionStore::new(&config);

        let jar = round_trip(store.write(CookieJar::new(), &record("pioneer", UserRole::User)))
            .add(Cookie::new("user_role", "admin"));
        let stored = store.read(&jar);

        assert_eq!(stored.token.as_deref(), Some("tok123"));
        assert_eq!(stored.role, None);
    }

    #[test]
    fn test_foreign_secret_reads_as_absent() {
        let config = config();
        let other = AuthConfig {
            session_secret: [1u8; 32],
            ..AuthConfig::default()
        };

        let jar = round_trip(
            CookieSessionStore::new(&other).write(CookieJar::new(), &record("x", UserRole::Admin)),
        );
        let stored = CookieSessionStore::new(&config).read(&jar);

        assert!(!stored.is_authenticated());
        assert_eq!(stored, StoredSession::default());
    }

    #[test]
    fn test_take_bundle_always_removes() {
        let config = config();
        let store = CookieSessionStore::new(&config);

        let bundle = OAuthBundle::new(ProviderTokens {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: None,
        });
        let jar = round_trip(store.write_bundle(CookieJar::new(), &bundle).unwrap());

        let (jar, raw) = store.take_bundle(jar);
        assert!(raw.is_some());
        assert_eq!(jar.get("supabase_session").map(|c| c.value()), Some(""));

        let (jar, raw) = store.take_bundle(round_trip(jar));
        assert!(raw.is_none());
        assert_eq!(jar.get("supabase_session").map(|c| c.value()), Some(""));
    }

    #[test]
    fn test_clear_expires_everything() {
        let config = config();
        let store = CookieSessionStore::new(&config);

        let jar = store.clear(CookieJar::new());
        for name in ["auth_token", "user_email", "user_role", "supabase_session"] {
            let cookie = jar.get(name).expect("removal written");
            assert_eq!(cookie.value(), "");
            assert_eq!(cookie.max_age().map(|age| age.whole_seconds()), Some(0));
        }
    }

    #[test]
    fn test_forwarded_cookies() {
        let jar = CookieJar::new()
            .add(Cookie::new("sb-code-verifier", "v1"))
            .add(Cookie::new("other", "x"));
        let forwarded = forwarded_cookies(&jar);
        assert_eq!(forwarded.get("sb-code-verifier"), Some("v1"));
        assert_eq!(forwarded.get("missing"), None);
    }
}
