//! Redirect Error Markers
//!
//! The fixed vocabulary carried in the `error` query parameter of redirects.
//! The login page renders these; nothing else is ever put in that slot except
//! a provider's own message after a failed session install.

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RedirectError {
    /// Callback reached without an authorization code
    #[display("no_code")]
    NoCode,
    /// Provider rejected the code or returned no session
    #[display("session_exchange_failed")]
    SessionExchangeFailed,
    /// Unexpected failure while handling the callback
    #[display("callback_error")]
    CallbackError,
    /// Bridge found no intermediate bundle (already consumed or expired)
    #[display("missing_session")]
    MissingSession,
    /// Session install failed without a provider message
    #[display("set_session_error")]
    SetSessionError,
    /// Bundle unreadable or client storage failed
    #[display("callback_failed")]
    CallbackFailed,
    /// Admin page requested without a session
    #[display("admin_required")]
    AdminRequired,
    /// Admin page requested by a non-admin session
    #[display("admin_only")]
    AdminOnly,
}

impl RedirectError {
    pub const ALL: [RedirectError; 8] = [
        RedirectError::NoCode,
        RedirectError::SessionExchangeFailed,
        RedirectError::CallbackError,
        RedirectError::MissingSession,
        RedirectError::SetSessionError,
        RedirectError::CallbackFailed,
        RedirectError::AdminRequired,
        RedirectError::AdminOnly,
    ];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RedirectError::NoCode => "no_code",
            RedirectError::SessionExchangeFailed => "session_exchange_failed",
            RedirectError::CallbackError => "callback_error",
            RedirectError::MissingSession => "missing_session",
            RedirectError::SetSessionError => "set_session_error",
            RedirectError::CallbackFailed => "callback_failed",
            RedirectError::AdminRequired => "admin_required",
            RedirectError::AdminOnly => "admin_only",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        for marker in RedirectError::ALL {
            assert_eq!(marker.to_string(), marker.as_str());
        }
    }

    #[test]
    fn test_markers_are_url_safe() {
        for marker in RedirectError::ALL {
            assert!(
                marker
                    .as_str()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_')
            );
        }
    }
}
