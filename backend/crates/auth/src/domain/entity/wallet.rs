//! Wallet Entities
//!
//! Values exchanged with the wallet SDK and the wallet network API.

use serde::{Deserialize, Serialize};

/// Global object the wallet browser injects into pages
pub const WALLET_SDK_GLOBAL: &str = "Pi";

/// Permission scopes requested from the wallet SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletScope {
    Username,
    Payments,
}

impl WalletScope {
    /// The fixed scope set used for sign-in
    pub const SIGN_IN: [WalletScope; 2] = [WalletScope::Username, WalletScope::Payments];

    pub const fn as_str(&self) -> &'static str {
        match self {
            WalletScope::Username => "username",
            WalletScope::Payments => "payments",
        }
    }
}

/// Wallet user as reported by the SDK or `/v2/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletUser {
    pub uid: String,
    pub username: String,
}

/// Successful SDK authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAuthResult {
    pub access_token: String,
    pub user: WalletUser,
}

/// A payment the SDK found unfinished during authentication
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncompletePayment {
    pub identifier: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Whether the page runs inside the wallet browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WalletContext {
    pub wallet_browser: bool,
}

impl WalletContext {
    /// Active when the user agent carries the wallet marker or the SDK global
    /// was injected
    pub fn detect(user_agent: Option<&str>, sdk_present: bool) -> Self {
        let ua_match = user_agent.is_some_and(platform::client::is_wallet_browser);
        Self {
            wallet_browser: ua_match || sdk_present,
        }
    }

    pub fn is_active(&self) -> bool {
        self.wallet_browser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_user_agent() {
        let ctx = WalletContext::detect(Some("Mozilla/5.0 PiBrowser/2.3"), false);
        assert!(ctx.is_active());
    }

    #[test]
    fn test_detect_by_sdk_global() {
        let ctx = WalletContext::detect(Some("Mozilla/5.0 Chrome/120"), true);
        assert!(ctx.is_active());
    }

    #[test]
    fn test_plain_browser_inactive() {
        assert!(!WalletContext::detect(Some("Mozilla/5.0 Chrome/120"), false).is_active());
        assert!(!WalletContext::detect(None, false).is_active());
    }

    #[test]
    fn test_sign_in_scopes() {
        let scopes: Vec<&str> = WalletScope::SIGN_IN.iter().map(WalletScope::as_str).collect();
        assert_eq!(scopes, ["username", "payments"]);
    }
}
