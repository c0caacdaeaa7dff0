//! Provider Tokens and the Intermediate OAuth Bundle
//!
//! The bundle ferries freshly exchanged tokens from the callback to the
//! session bridge exactly once. On the wire it is base64url(JSON) so it
//! survives cookie encoding untouched and stays readable by page scripts.

use platform::crypto::{from_base64url, to_base64url};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Access/refresh pair issued by an identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds, when the provider reports it
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl ProviderTokens {
    /// A provider may answer 200 with blank tokens; that is not a session
    pub fn is_empty(&self) -> bool {
        self.access_token.trim().is_empty()
    }
}

/// Short-lived, script-readable cookie payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthBundle(ProviderTokens);

impl OAuthBundle {
    pub fn new(tokens: ProviderTokens) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &ProviderTokens {
        &self.0
    }

    pub fn into_tokens(self) -> ProviderTokens {
        self.0
    }

    /// Cookie value
    pub fn encode(&self) -> AuthResult<String> {
        let json = serde_json::to_vec(&self.0)
            .map_err(|e| AuthError::Internal(format!("bundle serialization: {e}")))?;
        Ok(to_base64url(&json))
    }

    /// Parse a cookie value produced by [`OAuthBundle::encode`]
    pub fn decode(raw: &str) -> AuthResult<Self> {
        let bytes = from_base64url(raw.trim())
            .map_err(|e| AuthError::BundleMalformed(format!("base64: {e}")))?;
        let tokens: ProviderTokens = serde_json::from_slice(&bytes)
            .map_err(|e| AuthError::BundleMalformed(format!("json: {e}")))?;

        if tokens.is_empty() {
            return Err(AuthError::BundleMalformed("empty access token".to_string()));
        }

        Ok(Self(tokens))
    }
}
