//! Wallet Session Verification Client
//!
//! Trades an SDK authentication result for provider tokens at the backend
//! verification endpoint.

use serde::Serialize;

use crate::domain::entity::{ProviderTokens, WalletAuthResult};
use crate::domain::repository::WalletSessionVerifier;
use crate::error::AuthResult;
use crate::infra::http::{build_client, read_json};

#[derive(Serialize)]
struct VerifyRequest<'a> {
    access_token: &'a str,
    username: &'a str,
    uid: &'a str,
}

/// HTTP wallet session verifier
#[derive(Clone)]
pub struct HttpWalletSessionVerifier {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpWalletSessionVerifier {
    pub fn new(endpoint: impl Into<String>) -> AuthResult<Self> {
        Ok(Self {
            http: build_client()?,
            endpoint: endpoint.into(),
        })
    }
}

impl WalletSessionVerifier for HttpWalletSessionVerifier {
    async fn verify(&self, auth: &WalletAuthResult) -> AuthResult<ProviderTokens> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&VerifyRequest {
                access_token: &auth.access_token,
                username: &auth.user.username,
                uid: &auth.user.uid,
            })
            .send()
            .await?;

        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::WalletUser;
    use crate::error::AuthError;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn auth() -> WalletAuthResult {
        WalletAuthResult {
            access_token: "pi-token".to_string(),
            user: WalletUser {
                uid: "a1b2c3".to_string(),
                username: "pioneer".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_verify_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/pi/verify"))
            .and(body_json(json!({
                "access_token": "pi-token",
                "username": "pioneer",
                "uid": "a1b2c3"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "sb-at",
                "refresh_token": "sb-rt",
                "expires_at": 1_900_000_000
            })))
            .mount(&server)
            .await;

        let verifier =
            HttpWalletSessionVerifier::new(format!("{}/api/auth/pi/verify", server.uri())).unwrap();
        let tokens = verifier.verify(&auth()).await.unwrap();

        assert_eq!(tokens.access_token, "sb-at");
        assert_eq!(tokens.refresh_token, "sb-rt");
    }

    #[tokio::test]
    async fn test_verify_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"message": "Pi user not allowed"})),
            )
            .mount(&server)
            .await;

        let verifier = HttpWalletSessionVerifier::new(server.uri()).unwrap();
        let err = verifier.verify(&auth()).await.unwrap_err();

        assert!(matches!(err, AuthError::ProviderRejected(msg) if msg == "Pi user not allowed"));
    }
}
