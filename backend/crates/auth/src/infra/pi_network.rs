//! Wallet Network API Client
//!
//! Resolves a wallet access token to its user via `GET /v2/me`.

use crate::domain::entity::WalletUser;
use crate::domain::repository::WalletProfileVerifier;
use crate::error::AuthResult;
use crate::infra::http::{build_client, read_json};

/// Public API of the wallet network
pub const DEFAULT_WALLET_API_URL: &str = "https://api.minepi.com";

/// Wallet network API configuration
#[derive(Debug, Clone)]
pub struct WalletApiConfig {
    /// API root, without trailing slash
    pub base_url: String,
}

impl Default for WalletApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WALLET_API_URL)
    }
}

impl WalletApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Wallet network client
#[derive(Clone)]
pub struct PiNetworkClient {
    http: reqwest::Client,
    config: WalletApiConfig,
}

impl PiNetworkClient {
    pub fn new(config: WalletApiConfig) -> AuthResult<Self> {
        Ok(Self {
            http: build_client()?,
            config,
        })
    }
}

impl WalletProfileVerifier for PiNetworkClient {
    async fn fetch_me(&self, access_token: &str) -> AuthResult<WalletUser> {
        let response = self
            .http
            .get(format!("{}/v2/me", self.config.base_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        let user: WalletUser = read_json(response).await?;
        tracing::debug!(uid = %user.uid, "Wallet token verified");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_me() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/me"))
            .and(header("authorization", "Bearer pi-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "uid": "a1b2c3",
                "username": "pioneer",
                "credentials": {"scopes": ["username", "payments"]}
            })))
            .mount(&server)
            .await;

        let client = PiNetworkClient::new(WalletApiConfig::new(server.uri())).unwrap();
        let user = client.fetch_me("pi-token").await.unwrap();

        assert_eq!(
            user,
            WalletUser {
                uid: "a1b2c3".to_string(),
                username: "pioneer".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_me_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "unauthorized",
                "error_message": "Invalid access token"
            })))
            .mount(&server)
            .await;

        let client = PiNetworkClient::new(WalletApiConfig::new(server.uri())).unwrap();
        let err = client.fetch_me("expired").await.unwrap_err();

        assert!(matches!(err, AuthError::ProviderRejected(_)));
    }

    #[tokio::test]
    async fn test_fetch_me_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/me"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = PiNetworkClient::new(WalletApiConfig::new(server.uri())).unwrap();
        let err = client.fetch_me("t").await.unwrap_err();

        assert!(matches!(err, AuthError::ProviderUnavailable(_)));
    }
}
