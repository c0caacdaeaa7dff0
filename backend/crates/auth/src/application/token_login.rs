//! Token Login Use Case
//!
//! One login path for every wallet-token endpoint. With
//! `require_real_verification` the token is resolved against the wallet
//! network; without it (sandbox) a stable placeholder user is derived from the
//! token itself.
//!
//! A missing token or one the wallet network refuses is a hard failure.
//! Anything else that goes wrong yields a degraded placeholder profile so the
//! client always has an identity to render; `UserProfile::degraded` tells it
//! apart.

use std::sync::Arc;

use platform::crypto::{hmac_sha256, to_base64url};

use crate::application::config::AuthConfig;
use crate::application::write_session::WriteSessionUseCase;
use crate::domain::entity::profile::{FALLBACK_UID, FALLBACK_USERNAME};
use crate::domain::entity::{Identity, SessionRecord, UserProfile, WalletUser};
use crate::domain::repository::WalletProfileVerifier;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Token login input
pub struct TokenLoginInput {
    pub pi_auth_token: Option<String>,
}

/// Token login output
pub struct TokenLoginOutput {
    pub profile: UserProfile,
    pub record: SessionRecord,
}

/// Token login use case
pub struct TokenLoginUseCase<V>
where
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    verifier: Arc<V>,
    config: Arc<AuthConfig>,
}

impl<V> TokenLoginUseCase<V>
where
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    pub fn new(verifier: Arc<V>, config: Arc<AuthConfig>) -> Self {
        Self { verifier, config }
    }

    pub async fn execute(&self, input: TokenLoginInput) -> AuthResult<TokenLoginOutput> {
        let token = input
            .pi_auth_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingField("pi_auth_token"))?;

        match self.sign_in(&token).await {
            Ok(output) => Ok(output),
            // A refused credential is not an internal failure
            Err(e @ AuthError::ProviderRejected(_)) => {
                tracing::warn!(error = %e, "Wallet token rejected");
                Err(e)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login degraded to placeholder profile");
                Ok(self.fallback(token))
            }
        }
    }

    async fn sign_in(&self, token: &str) -> AuthResult<TokenLoginOutput> {
        let verified = self.config.require_real_verification;
        let user = if verified {
            self.verifier.fetch_me(token).await?
        } else {
            self.sandbox_user(token)
        };

        let identity = Identity::from_username(user.username.clone());
        let record =
            WriteSessionUseCase::new(self.config.clone()).record_for(token.to_string(), &identity)?;

        Ok(TokenLoginOutput {
            profile: UserProfile {
                uid: user.uid,
                username: user.username,
                email: record.email.clone(),
                role: record.role,
                balance: 0.0,
                verified,
                degraded: false,
            },
            record,
        })
    }

    /// Stable per-token identity for sandbox mode
    fn sandbox_user(&self, token: &str) -> WalletUser {
        let digest = to_base64url(&hmac_sha256(&self.config.session_secret, token.as_bytes()));
        let short: String = digest.chars().take(12).collect();
        WalletUser {
            uid: format!("sandbox_{short}"),
            username: format!("pioneer_{}", &short[..6.min(short.len())]),
        }
    }

    /// Placeholder identity; never admin
    fn fallback(&self, token: String) -> TokenLoginOutput {
        let record = SessionRecord::new(
            token,
            FALLBACK_USERNAME.to_string(),
            UserRole::User,
            self.config.session_ttl_chrono(),
        );

        TokenLoginOutput {
            profile: UserProfile {
                uid: FALLBACK_UID.to_string(),
                username: FALLBACK_USERNAME.to_string(),
                email: record.email.clone(),
                role: UserRole::User,
                balance: 0.0,
                verified: false,
                degraded: true,
            },
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubVerifier(fn() -> AuthResult<WalletUser>);

    impl WalletProfileVerifier for StubVerifier {
        async fn fetch_me(&self, _access_token: &str) -> AuthResult<WalletUser> {
            (self.0)()
        }
    }

    fn use_case(result: fn() -> AuthResult<WalletUser>) -> TokenLoginUseCase<StubVerifier> {
        TokenLoginUseCase::new(
            Arc::new(StubVerifier(result)),
            Arc::new(AuthConfig::default()),
        )
    }

    fn input(token: &str) -> TokenLoginInput {
        TokenLoginInput {
            pi_auth_token: Some(token.to_string()),
        }
    }

    #[tokio::test]
    async fn test_refused_token_is_not_degraded() {
        let result = use_case(|| Err(AuthError::ProviderRejected("Invalid access token".into())))
            .execute(input("forged"))
            .await;

        assert!(matches!(result, Err(AuthError::ProviderRejected(msg)) if msg == "Invalid access token"));
    }

    #[tokio::test]
    async fn test_upstream_outage_degrades() {
        let output = use_case(|| Err(AuthError::ProviderUnavailable("timeout".into())))
            .execute(input("tok"))
            .await
            .unwrap();

        assert!(output.profile.degraded);
        assert_eq!(output.profile.uid, FALLBACK_UID);
        assert_eq!(output.record.role, UserRole::User);
    }

    #[tokio::test]
    async fn test_missing_token() {
        let result = use_case(|| Err(AuthError::Internal("unused".into())))
            .execute(TokenLoginInput { pi_auth_token: None })
            .await;

        assert!(matches!(result, Err(AuthError::MissingField("pi_auth_token"))));
    }
}
