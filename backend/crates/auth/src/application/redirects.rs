//! Redirect Locations
//!
//! Every browser-facing failure ends in a redirect whose query carries either a
//! fixed marker or, after a failed session install, the provider's message.

use crate::application::config::AuthConfig;
use crate::domain::value_object::{NextPath, RedirectError};

/// What the login page is told about a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    Marker(RedirectError),
    /// Message from the session library, shown verbatim
    Message(String),
}

impl LoginError {
    pub fn as_str(&self) -> &str {
        match self {
            LoginError::Marker(marker) => marker.as_str(),
            LoginError::Message(message) => message,
        }
    }
}

impl From<RedirectError> for LoginError {
    fn from(marker: RedirectError) -> Self {
        LoginError::Marker(marker)
    }
}

/// `/auth/login?error=<error>`
pub fn login_with_error(config: &AuthConfig, error: &LoginError) -> String {
    format!(
        "{}?error={}",
        config.login_path,
        urlencoding::encode(error.as_str())
    )
}

/// `/auth/login?redirect=<path>[&error=<marker>]`
pub fn login_for_path(config: &AuthConfig, path: &str, error: Option<RedirectError>) -> String {
    let mut location = format!(
        "{}?redirect={}",
        config.login_path,
        urlencoding::encode(path)
    );
    if let Some(marker) = error {
        location.push_str("&error=");
        location.push_str(marker.as_str());
    }
    location
}

/// `/?error=<marker>`
pub fn home_with_error(config: &AuthConfig, error: RedirectError) -> String {
    format!("{}?error={}", config.home_path, error.as_str())
}

/// `/auth/processing?next=<next>`
pub fn processing(config: &AuthConfig, next: &NextPath) -> String {
    format!(
        "{}?next={}",
        config.processing_path,
        urlencoding::encode(next.as_str())
    )
}
