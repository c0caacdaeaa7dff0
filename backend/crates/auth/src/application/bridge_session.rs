//! Bridge Session Use Case
//!
//! Consumes the intermediate bundle: decode it, install the tokens into the
//! durable auth state, and derive the durable session record. The caller is
//! responsible for expiring the bundle cookie whatever the outcome.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::redirects::LoginError;
use crate::application::write_session::WriteSessionUseCase;
use crate::domain::entity::{Identity, OAuthBundle, SessionRecord};
use crate::domain::repository::SessionInstaller;
use crate::domain::value_object::RedirectError;
use crate::error::{AuthError, AuthResult};

/// Bridge output
pub struct BridgeOutput {
    pub identity: Identity,
    pub record: SessionRecord,
}

/// Bridge session use case
pub struct BridgeSessionUseCase<I>
where
    I: SessionInstaller + Send + Sync + 'static,
{
    installer: Arc<I>,
    config: Arc<AuthConfig>,
}

impl<I> BridgeSessionUseCase<I>
where
    I: SessionInstaller + Send + Sync + 'static,
{
    pub fn new(installer: Arc<I>, config: Arc<AuthConfig>) -> Self {
        Self { installer, config }
    }

    /// `raw_bundle` is the bundle cookie value, if the request carried one
    pub async fn execute(&self, raw_bundle: Option<&str>) -> AuthResult<BridgeOutput> {
        let raw = raw_bundle.ok_or(AuthError::SessionInvalid)?;
        let tokens = OAuthBundle::decode(raw)?.into_tokens();

        let identity = self.installer.install(&tokens).await?;

        let record = WriteSessionUseCase::new(self.config.clone())
            .record_for(tokens.access_token, &identity)?;

        Ok(BridgeOutput { identity, record })
    }
}

/// What the login page is told after a failed bridge
pub fn bridge_error(err: &AuthError) -> LoginError {
    match err {
        AuthError::SessionInvalid => RedirectError::MissingSession.into(),
        AuthError::BundleMalformed(_) | AuthError::Storage(_) => {
            RedirectError::CallbackFailed.into()
        }
        AuthError::ProviderRejected(message) if !message.trim().is_empty() => {
            LoginError::Message(message.clone())
        }
        _ => RedirectError::SetSessionError.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_errors() {
        assert_eq!(
            bridge_error(&AuthError::SessionInvalid),
            LoginError::Marker(RedirectError::MissingSession)
        );
        assert_eq!(
            bridge_error(&AuthError::BundleMalformed("json".into())),
            LoginError::Marker(RedirectError::CallbackFailed)
        );
        assert_eq!(
            bridge_error(&AuthError::Storage("quota exceeded".into())),
            LoginError::Marker(RedirectError::CallbackFailed)
        );
        assert_eq!(
            bridge_error(&AuthError::ProviderRejected("Token expired".into())),
            LoginError::Message("Token expired".to_string())
        );
        assert_eq!(
            bridge_error(&AuthError::ProviderRejected(String::new())),
            LoginError::Marker(RedirectError::SetSessionError)
        );
        assert_eq!(
            bridge_error(&AuthError::ProviderUnavailable("timeout".into())),
            LoginError::Marker(RedirectError::SetSessionError)
        );
    }
}
