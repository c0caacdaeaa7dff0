//! Wallet Sign-In Use Case
//!
//! Alternate login from inside the wallet browser: SDK authentication, backend
//! verification, then install into the client session store. The store is
//! written once, last, and only when every earlier step succeeded.

use std::sync::Arc;

use crate::domain::entity::{IncompletePayment, WalletContext, WalletScope, WalletUser};
use crate::domain::repository::{ClientSessionStore, WalletSdk, WalletSessionVerifier};
use crate::error::AuthError;

/// Wallet sign-in outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletSignInOutcome {
    /// Not inside the wallet browser; the option is not offered
    Unavailable,
    SignedIn(WalletUser),
    /// User-visible notice; the client session is unchanged
    Failed(String),
}

/// Wallet sign-in use case
pub struct WalletSignInUseCase<S, V, C>
where
    S: WalletSdk + Send + Sync + 'static,
    V: WalletSessionVerifier + Send + Sync + 'static,
    C: ClientSessionStore + Send + Sync + 'static,
{
    sdk: Arc<S>,
    verifier: Arc<V>,
    store: Arc<C>,
}

impl<S, V, C> WalletSignInUseCase<S, V, C>
where
    S: WalletSdk + Send + Sync + 'static,
    V: WalletSessionVerifier + Send + Sync + 'static,
    C: ClientSessionStore + Send + Sync + 'static,
{
    pub fn new(sdk: Arc<S>, verifier: Arc<V>, store: Arc<C>) -> Self {
        Self {
            sdk,
            verifier,
            store,
        }
    }

    pub async fn execute(&self, context: WalletContext) -> WalletSignInOutcome {
        if !context.is_active() {
            return WalletSignInOutcome::Unavailable;
        }

        let on_incomplete_payment = |payment: &IncompletePayment| {
            tracing::info!(
                payment_id = %payment.identifier,
                txid = payment.transaction_id.as_deref().unwrap_or("-"),
                "Incomplete wallet payment found during sign-in"
            );
        };

        let auth = match self
            .sdk
            .authenticate(&WalletScope::SIGN_IN, &on_incomplete_payment)
            .await
        {
            Ok(auth) => auth,
            Err(e) => return failed("Pi authentication failed", &e),
        };

        let tokens = match self.verifier.verify(&auth).await {
            Ok(tokens) if !tokens.is_empty() => tokens,
            Ok(_) => return failed("Pi verification failed", &AuthError::EmptySession),
            Err(e) => return failed("Pi verification failed", &e),
        };

        if let Err(e) = self.store.apply(&tokens).await {
            return failed("Could not save your session", &e);
        }

        tracing::info!(username = %auth.user.username, "Wallet sign-in completed");
        WalletSignInOutcome::SignedIn(auth.user)
    }
}

fn failed(notice: &str, err: &AuthError) -> WalletSignInOutcome {
    err.log();
    WalletSignInOutcome::Failed(format!("{notice}: {err}"))
}
