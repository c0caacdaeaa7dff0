//! Shared response handling for the provider HTTP clients

use serde::de::DeserializeOwned;

use crate::error::{AuthError, AuthResult};

/// Build the HTTP client used by all provider adapters
pub fn build_client() -> AuthResult<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| AuthError::Internal(format!("HTTP client: {e}")))
}

/// Decode a provider response.
///
/// 4xx means the provider refused the credential, 5xx that it is failing;
/// a 2xx body that does not decode is a malformed response.
pub async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> AuthResult<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_client_error() {
        return Err(AuthError::ProviderRejected(provider_message(&body, status)));
    }
    if !status.is_success() {
        return Err(AuthError::ProviderUnavailable(provider_message(&body, status)));
    }

    serde_json::from_slice(&body).map_err(|e| AuthError::ProviderMalformed(e.to_string()))
}

/// Best human-readable message in an error body
fn provider_message(body: &[u8], status: reqwest::StatusCode) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| value.get(key)?.as_str().map(str::to_string))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_message_keys() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            provider_message(
                br#"{"error":"invalid_grant","error_description":"Code expired"}"#,
                status
            ),
            "Code expired"
        );
        assert_eq!(
            provider_message(br#"{"code":401,"msg":"Invalid JWT"}"#, status),
            "Invalid JWT"
        );
        assert_eq!(provider_message(b"<html>", status), "HTTP 400 Bad Request");
    }
}
