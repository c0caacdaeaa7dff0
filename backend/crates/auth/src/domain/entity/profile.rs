//! User Profile returned by the login endpoints

use serde::Serialize;

use crate::domain::value_object::user_role::UserRole;

/// Username shown when the login fell back to a placeholder identity
pub const FALLBACK_USERNAME: &str = "Pioneer";
/// uid marking a placeholder identity
pub const FALLBACK_UID: &str = "fallback";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub uid: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    /// Wallet balance; never fetched here, always zero
    pub balance: f64,
    /// Whether the token was checked against the wallet network
    pub verified: bool,
    /// True when the profile is a placeholder after an internal failure
    pub degraded: bool,
}
