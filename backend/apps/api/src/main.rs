//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::{AuthConfig, HostedAuthClient, HostedAuthConfig, PiNetworkClient, WalletApiConfig};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth_config = load_auth_config()?;
    tracing::info!(
        secure_cookies = auth_config.cookie_secure,
        real_verification = auth_config.require_real_verification,
        "Auth configuration loaded"
    );

    // Identity sources
    let supabase_url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
    let anon_key = env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?;
    let provider = HostedAuthClient::new(HostedAuthConfig::new(supabase_url, anon_key))?;

    let wallet_config = env::var("PI_API_BASE_URL")
        .map(WalletApiConfig::new)
        .unwrap_or_default();
    let wallet = PiNetworkClient::new(wallet_config)?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/api/health", get(health))
        .merge(auth::auth_router(provider, wallet, auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Auth configuration from the environment.
///
/// Debug builds fall back to a random secret and sandbox login; release
/// builds require `SESSION_SECRET`.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let base = match env::var("SESSION_SECRET") {
        Ok(secret_b64) => AuthConfig {
            session_secret: decode_secret(&secret_b64)?,
            ..AuthConfig::default()
        },
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, using a random development secret");
            AuthConfig::development()
        }
        Err(_) => anyhow::bail!("SESSION_SECRET must be set in production"),
    };

    let app_env = env::var("APP_ENV").ok();
    let sandbox = env::var("PI_SANDBOX")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(!base.require_real_verification);

    Ok(AuthConfig {
        cookie_secure: secure_cookies(app_env.as_deref(), base.cookie_secure),
        require_real_verification: !sandbox,
        admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| base.admin_email.clone()),
        ..base
    })
}

/// `Secure` follows `APP_ENV` when it is set; otherwise the base config decides.
fn secure_cookies(app_env: Option<&str>, fallback: bool) -> bool {
    match app_env {
        Some(env) => env.trim() == "production",
        None => fallback,
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("SESSION_SECRET must be base64")?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| {
            anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", b.len())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_cookies_follow_app_env() {
        assert!(secure_cookies(Some("production"), false));
        assert!(!secure_cookies(Some("development"), true));
        assert!(!secure_cookies(Some("staging"), true));
    }

    #[test]
    fn test_secure_cookies_default_without_app_env() {
        assert!(secure_cookies(None, true));
        assert!(!secure_cookies(None, false));
    }

    #[test]
    fn test_decode_secret_length() {
        let ok = general_purpose::STANDARD.encode([7u8; 32]);
        assert_eq!(decode_secret(&ok).unwrap(), [7u8; 32]);

        let short = general_purpose::STANDARD.encode([7u8; 16]);
        assert!(decode_secret(&short).is_err());
        assert!(decode_secret("not base64!").is_err());
    }
}
