//! Route Classification
//!
//! Static table mapping a request path to exactly one [`RouteClass`].
//! Classes are checked in a fixed order; the first match wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Machine endpoints; they authenticate themselves
    Api,
    /// Framework internals, files, the placeholder image
    Asset,
    AdminOnly,
    Protected,
    /// Login/registration pages
    AuthPage,
    Public,
}

#[derive(Debug, Clone)]
pub struct RoutePolicy {
    pub api_prefix: String,
    pub asset_prefixes: Vec<String>,
    pub placeholder_image: String,
    pub admin_prefixes: Vec<String>,
    /// Paths protected by exact match (home)
    pub protected_exact: Vec<String>,
    pub protected_prefixes: Vec<String>,
    pub auth_pages: Vec<String>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            api_prefix: "/api".to_string(),
            asset_prefixes: vec!["/_next".to_string()],
            placeholder_image: "/placeholder.svg".to_string(),
            admin_prefixes: vec!["/admin".to_string()],
            protected_exact: vec!["/".to_string()],
            protected_prefixes: [
                "/dashboard",
                "/post-ad",
                "/my-ads",
                "/messages",
                "/favorites",
                "/profile",
                "/settings",
                "/wallet",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            auth_pages: vec!["/auth/login".to_string(), "/auth/register".to_string()],
        }
    }
}

impl RoutePolicy {
    pub fn classify(&self, path: &str) -> RouteClass {
        if under_prefix(path, &self.api_prefix) {
            return RouteClass::Api;
        }

        if self.is_asset(path) {
            return RouteClass::Asset;
        }

        if self.admin_prefixes.iter().any(|p| under_prefix(path, p)) {
            return RouteClass::AdminOnly;
        }

        if self.protected_exact.iter().any(|p| path == p)
            || self.protected_prefixes.iter().any(|p| under_prefix(path, p))
        {
            return RouteClass::Protected;
        }

        if self.auth_pages.iter().any(|p| path == p) {
            return RouteClass::AuthPage;
        }

        RouteClass::Public
    }

    fn is_asset(&self, path: &str) -> bool {
        path == self.placeholder_image
            || path.contains('.')
            || self.asset_prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

/// `prefix` itself or anything below it, on a segment boundary
fn under_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
