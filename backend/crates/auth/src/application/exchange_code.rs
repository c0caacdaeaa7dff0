//! Exchange Code Use Case
//!
//! Completes the OAuth callback: trades the authorization code for provider
//! tokens and packages them as the intermediate bundle. Nothing durable is
//! written here.

use std::sync::Arc;

use crate::domain::entity::OAuthBundle;
use crate::domain::repository::{ForwardedCookies, IdentityProvider};
use crate::domain::value_object::RedirectError;
use crate::error::{AuthError, AuthResult};

/// Exchange code use case
pub struct ExchangeCodeUseCase<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    provider: Arc<P>,
}

impl<P> ExchangeCodeUseCase<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Exchange `code`, forwarding the request's cookies to the provider
    pub async fn execute(
        &self,
        code: Option<&str>,
        cookies: &ForwardedCookies,
    ) -> AuthResult<OAuthBundle> {
        let code = code
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(AuthError::MissingField("code"))?;

        let tokens = self.provider.exchange_code(code, cookies).await?;

        if tokens.is_empty() {
            return Err(AuthError::EmptySession);
        }

        Ok(OAuthBundle::new(tokens))
    }
}

/// Marker for a failed callback
pub fn callback_marker(err: &AuthError) -> RedirectError {
    match err {
        AuthError::MissingField(_) => RedirectError::NoCode,
        AuthError::ProviderRejected(_)
        | AuthError::EmptySession
        | AuthError::ProviderUnavailable(_) => RedirectError::SessionExchangeFailed,
        _ => RedirectError::CallbackError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_markers() {
        assert_eq!(
            callback_marker(&AuthError::MissingField("code")),
            RedirectError::NoCode
        );
        assert_eq!(
            callback_marker(&AuthError::ProviderRejected("invalid grant".into())),
            RedirectError::SessionExchangeFailed
        );
        assert_eq!(
            callback_marker(&AuthError::EmptySession),
            RedirectError::SessionExchangeFailed
        );
        assert_eq!(
            callback_marker(&AuthError::ProviderMalformed("not json".into())),
            RedirectError::CallbackError
        );
        assert_eq!(
            callback_marker(&AuthError::Internal("boom".into())),
            RedirectError::CallbackError
        );
    }
}
