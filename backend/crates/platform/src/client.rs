//! Client identification utilities
//!
//! Common functions for identifying clients via HTTP headers.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Marker the Pi Browser puts in its User-Agent
pub const WALLET_BROWSER_MARKER: &str = "PiBrowser";

/// What we know about the calling client, for logging and context detection
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    /// Client IP address (from X-Forwarded-For or direct connection)
    pub ip: Option<IpAddr>,
    /// Original User-Agent string
    pub user_agent: Option<String>,
}

impl ClientInfo {
    /// Whether the request came from inside the wallet browser
    pub fn is_wallet_browser(&self) -> bool {
        self.user_agent.as_deref().is_some_and(is_wallet_browser)
    }

    /// Get IP as string (for logging)
    pub fn ip_string(&self) -> Option<String> {
        self.ip.map(|ip| ip.to_string())
    }
}

/// Extract client info from request headers
pub fn extract_client_info(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> ClientInfo {
    ClientInfo {
        ip: extract_client_ip(headers, direct_ip),
        user_agent: extract_user_agent(headers).map(str::to_string),
    }
}

/// User-Agent header, if present and valid ASCII
pub fn extract_user_agent(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::USER_AGENT).and_then(|v| v.to_str().ok())
}

/// Wallet browser detection by User-Agent marker
pub fn is_wallet_browser(user_agent: &str) -> bool {
    user_agent.contains(WALLET_BROWSER_MARKER)
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - Direct connection IP address
///
/// ## Returns
/// The client IP address, or None if not determinable
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    // First IP in the list is the original client
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}
