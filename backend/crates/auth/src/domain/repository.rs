//! Port Traits
//!
//! Interfaces to the identity sources and the client-side state.
//! Implementations live in the infrastructure layer (or the browser).

use crate::domain::entity::{
    Identity, IncompletePayment, ProviderTokens, WalletAuthResult, WalletScope, WalletUser,
};
use crate::error::AuthResult;

/// Cookies of the inbound request, forwarded to the provider so it can
/// correlate PKCE state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedCookies(Vec<(String, String)>);

impl ForwardedCookies {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ForwardedCookies {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Hosted OAuth provider: authorization code exchange
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Exchange an authorization code for provider tokens
    async fn exchange_code(
        &self,
        code: &str,
        cookies: &ForwardedCookies,
    ) -> AuthResult<ProviderTokens>;
}

/// Durable client auth state: install tokens, learn who they belong to
#[trait_variant::make(SessionInstaller: Send)]
pub trait LocalSessionInstaller {
    async fn install(&self, tokens: &ProviderTokens) -> AuthResult<Identity>;
}

/// Wallet network API: resolve a wallet access token to its user
#[trait_variant::make(WalletProfileVerifier: Send)]
pub trait LocalWalletProfileVerifier {
    async fn fetch_me(&self, access_token: &str) -> AuthResult<WalletUser>;
}

/// In-browser wallet SDK
#[trait_variant::make(WalletSdk: Send)]
pub trait LocalWalletSdk {
    async fn authenticate(
        &self,
        scopes: &[WalletScope],
        on_incomplete_payment: &(dyn Fn(&IncompletePayment) + Send + Sync),
    ) -> AuthResult<WalletAuthResult>;
}

/// Backend endpoint trading a wallet credential for provider tokens
#[trait_variant::make(WalletSessionVerifier: Send)]
pub trait LocalWalletSessionVerifier {
    async fn verify(&self, auth: &WalletAuthResult) -> AuthResult<ProviderTokens>;
}

/// Client auth library state
#[trait_variant::make(ClientSessionStore: Send)]
pub trait LocalClientSessionStore {
    async fn current(&self) -> AuthResult<Option<ProviderTokens>>;

    async fn apply(&self, tokens: &ProviderTokens) -> AuthResult<()>;
}

/// Client key-value storage
#[trait_variant::make(ClientStorage: Send)]
pub trait LocalClientStorage {
    async fn get(&self, key: &str) -> AuthResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> AuthResult<()>;
}
