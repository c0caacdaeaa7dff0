//! Cookie Management Infrastructure
//!
//! Cookie attributes live in [`CookieConfig`]; the cookie values themselves
//! travel through `axum_extra`'s `CookieJar`, which handles parsing and
//! percent-encoding on both directions.

use axum_extra::extract::cookie::{self as jar_cookie, Cookie};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl From<SameSite> for jar_cookie::SameSite {
    fn from(value: SameSite) -> Self {
        match value {
            SameSite::Strict => jar_cookie::SameSite::Strict,
            SameSite::Lax => jar_cookie::SameSite::Lax,
            SameSite::None => jar_cookie::SameSite::None,
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Config for `name` with default attributes
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build the cookie carrying `value`
    pub fn build(&self, value: impl Into<String>) -> Cookie<'static> {
        let mut builder = Cookie::build((self.name.clone(), value.into()))
            .path(self.path.clone())
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(self.same_site.into());

        if let Some(max_age) = self.max_age_secs {
            builder = builder.max_age(time::Duration::seconds(max_age));
        }

        builder.build()
    }

    /// Build a removal cookie (empty value, Max-Age=0, same path and flags)
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = self.build(String::new());
        cookie.make_removal();
        cookie
    }
}
