//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire; the web client sends and reads
//! them as-is.

use serde::{Deserialize, Serialize};

use crate::domain::entity::{Identity, UserProfile};

// ============================================================================
// Callback / Processing
// ============================================================================

/// Query of the OAuth callback redirect
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub next: Option<String>,
}

/// Query of the session bridge page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessingQuery {
    pub next: Option<String>,
}

// ============================================================================
// Set Session
// ============================================================================

/// Identity fields presented with a token
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDataDto {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl From<UserDataDto> for Identity {
    fn from(dto: UserDataDto) -> Self {
        Identity::new(dto.username, dto.email)
    }
}

/// Set session request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetSessionRequest {
    pub pi_auth_token: Option<String>,
    pub user_data: Option<UserDataDto>,
}

/// Set session response
#[derive(Debug, Clone, Serialize)]
pub struct SetSessionResponse {
    pub success: bool,
}

// ============================================================================
// Verify Session
// ============================================================================

/// Session verifier response
#[derive(Debug, Clone, Serialize)]
pub struct VerifySessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

// ============================================================================
// Token Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub pi_auth_token: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserProfile,
}

// ============================================================================
// Wallet Context
// ============================================================================

/// Wallet browser detection response
#[derive(Debug, Clone, Serialize)]
pub struct WalletContextResponse {
    pub wallet_browser: bool,
}
