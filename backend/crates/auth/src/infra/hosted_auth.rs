//! Hosted Auth Provider Client
//!
//! PKCE code exchange and token verification against the hosted auth service
//! (GoTrue-compatible REST API).

use serde::Deserialize;

use crate::domain::entity::{Identity, ProviderTokens};
use crate::domain::repository::{ForwardedCookies, IdentityProvider, SessionInstaller};
use crate::error::{AuthError, AuthResult};
use crate::infra::http::{build_client, read_json};

/// Hosted auth configuration
#[derive(Debug, Clone)]
pub struct HostedAuthConfig {
    /// Project URL, without trailing slash
    pub base_url: String,
    /// Public (anonymous) API key
    pub anon_key: String,
    /// Cookie the browser client stored the PKCE verifier in
    pub code_verifier_cookie: String,
}

impl HostedAuthConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let code_verifier_cookie = format!("sb-{}-auth-token-code-verifier", project_ref(&base_url));
        Self {
            base_url,
            anon_key: anon_key.into(),
            code_verifier_cookie,
        }
    }
}

/// `https://<ref>.supabase.co` -> `<ref>`
fn project_ref(base_url: &str) -> &str {
    let host = base_url
        .split_once("://")
        .map_or(base_url, |(_, rest)| rest);
    host.split(['.', ':', '/']).next().unwrap_or(host)
}

/// Hosted auth client
#[derive(Clone)]
pub struct HostedAuthClient {
    http: reqwest::Client,
    config: HostedAuthConfig,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Deserialize)]
struct UserResponse {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Deserialize, Default)]
struct UserMetadata {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    user_name: Option<String>,
}

impl HostedAuthClient {
    pub fn new(config: HostedAuthConfig) -> AuthResult<Self> {
        Ok(Self {
            http: build_client()?,
            config,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

impl IdentityProvider for HostedAuthClient {
    async fn exchange_code(
        &self,
        code: &str,
        cookies: &ForwardedCookies,
    ) -> AuthResult<ProviderTokens> {
        let verifier = cookies
            .get(&self.config.code_verifier_cookie)
            .map(|v| v.trim_matches('"'))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AuthError::ProviderRejected("PKCE code verifier missing".to_string()))?;

        let response = self
            .http
            .post(self.url("/auth/v1/token"))
            .query(&[("grant_type", "pkce")])
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({
                "auth_code": code,
                "code_verifier": verifier,
            }))
            .send()
            .await?;

        let token: TokenResponse = read_json(response).await?;

        tracing::debug!("Authorization code exchanged");

        Ok(ProviderTokens {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: token.expires_at,
        })
    }
}

impl SessionInstaller for HostedAuthClient {
    async fn install(&self, tokens: &ProviderTokens) -> AuthResult<Identity> {
        let response = self
            .http
            .get(self.url("/auth/v1/user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&tokens.access_token)
            .send()
            .await?;

        let user: UserResponse = read_json(response).await?;
        let username = user.user_metadata.username.or(user.user_metadata.user_name);

        Ok(Identity::new(username, user.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> HostedAuthClient {
        let config = HostedAuthConfig {
            code_verifier_cookie: "sb-test-auth-token-code-verifier".to_string(),
            ..HostedAuthConfig::new(server.uri(), "anon-key")
        };
        HostedAuthClient::new(config).unwrap()
    }

    fn cookies(verifier: &str) -> ForwardedCookies {
        [(
            "sb-test-auth-token-code-verifier".to_string(),
            verifier.to_string(),
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_verifier_cookie_name_from_project_url() {
        let config = HostedAuthConfig::new("https://abcdef.supabase.co/", "key");
        assert_eq!(config.base_url, "https://abcdef.supabase.co");
        assert_eq!(config.code_verifier_cookie, "sb-abcdef-auth-token-code-verifier");
    }

    #[tokio::test]
    async fn test_exchange_code_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "pkce"))
            .and(header("apikey", "anon-key"))
            .and(body_json(json!({"auth_code": "c0de", "code_verifier": "v3rifier"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "at",
                "refresh_token": "rt",
                "expires_at": 1_900_000_000,
                "token_type": "bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = client(&server)
            .exchange_code("c0de", &cookies("\"v3rifier\""))
            .await
            .unwrap();

        assert_eq!(tokens.access_token, "at");
        assert_eq!(tokens.refresh_token, "rt");
        assert_eq!(tokens.expires_at, Some(1_900_000_000));
    }

    #[tokio::test]
    async fn test_exchange_code_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Auth code expired"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .exchange_code("old", &cookies("v"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::ProviderRejected(msg) if msg == "Auth code expired"));
    }

    #[tokio::test]
    async fn test_exchange_without_verifier_skips_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server)
            .exchange_code("c0de", &ForwardedCookies::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::ProviderRejected(_)));
    }

    #[tokio::test]
    async fn test_exchange_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .exchange_code("c0de", &cookies("v"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::ProviderMalformed(_)));
    }

    #[tokio::test]
    async fn test_install_reads_identity() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", "Bearer at"))
            .and(header("apikey", "anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "8d1c",
                "email": "pioneer@example.com",
                "user_metadata": {"username": "pioneer"}
            })))
            .mount(&server)
            .await;

        let tokens = ProviderTokens {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            expires_at: None,
        };
        let identity = client(&server).install(&tokens).await.unwrap();

        assert_eq!(identity.username.as_deref(), Some("pioneer"));
        assert_eq!(identity.email.as_deref(), Some("pioneer@example.com"));
    }

    #[tokio::test]
    async fn test_install_rejected_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"code": 401, "msg": "invalid JWT"})),
            )
            .mount(&server)
            .await;

        let tokens = ProviderTokens {
            access_token: "bad".to_string(),
            refresh_token: String::new(),
            expires_at: None,
        };
        let err = client(&server).install(&tokens).await.unwrap_err();

        assert!(matches!(err, AuthError::ProviderRejected(msg) if msg == "invalid JWT"));
    }
}
