//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use platform::client::{extract_client_info, extract_user_agent};

use crate::application::config::AuthConfig;
use crate::application::redirects::{self, LoginError};
use crate::application::{
    BridgeSessionUseCase, CheckSessionUseCase, ExchangeCodeUseCase, TokenLoginInput,
    TokenLoginUseCase, WriteSessionInput, WriteSessionUseCase, bridge_error, callback_marker,
};
use crate::domain::entity::WalletContext;
use crate::domain::repository::{IdentityProvider, SessionInstaller, WalletProfileVerifier};
use crate::domain::value_object::NextPath;
use crate::error::AuthResult;
use crate::infra::cookie_session::{CookieSessionStore, forwarded_cookies};
use crate::presentation::dto::{
    CallbackQuery, LoginRequest, LoginResponse, ProcessingQuery, SetSessionRequest,
    SetSessionResponse, VerifySessionResponse, WalletContextResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<P, V>
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub wallet: Arc<V>,
    pub config: Arc<AuthConfig>,
}

impl<P, V> Clone for AuthAppState<P, V>
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            wallet: self.wallet.clone(),
            config: self.config.clone(),
        }
    }
}

/// Malformed or absent bodies read as empty, so the use case reports the
/// missing field instead of a framework rejection
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Unreadable JSON body");
        T::default()
    })
}

// ============================================================================
// OAuth Callback
// ============================================================================

/// GET /auth/callback
pub async fn auth_callback<P, V>(
    State(state): State<AuthAppState<P, V>>,
    Query(query): Query<CallbackQuery>,
    jar: CookieJar,
) -> Response
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    let config = &state.config;
    let next = NextPath::sanitize(query.next.as_deref());
    let use_case = ExchangeCodeUseCase::new(state.provider.clone());

    let written = match use_case
        .execute(query.code.as_deref(), &forwarded_cookies(&jar))
        .await
    {
        Ok(bundle) => CookieSessionStore::new(config).write_bundle(jar, &bundle),
        Err(e) => Err(e),
    };

    match written {
        Ok(jar) => {
            tracing::info!(next = %next, "OAuth callback completed");
            (jar, Redirect::to(&redirects::processing(config, &next))).into_response()
        }
        Err(e) => {
            let marker = callback_marker(&e);
            tracing::warn!(error = %e, marker = %marker, "OAuth callback failed");
            Redirect::to(&redirects::login_with_error(config, &marker.into())).into_response()
        }
    }
}

// ============================================================================
// Session Bridge
// ============================================================================

/// GET /auth/processing
///
/// Consumes the intermediate bundle. The bundle cookie is expired on every
/// outcome, so a repeated visit lands on `missing_session`.
pub async fn auth_processing<P, V>(
    State(state): State<AuthAppState<P, V>>,
    Query(query): Query<ProcessingQuery>,
    jar: CookieJar,
) -> Response
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    let config = &state.config;
    let store = CookieSessionStore::new(config);
    let (jar, raw_bundle) = store.take_bundle(jar);

    let use_case = BridgeSessionUseCase::new(state.provider.clone(), state.config.clone());

    match use_case.execute(raw_bundle.as_deref()).await {
        Ok(output) => {
            let next = NextPath::sanitize(query.next.as_deref());
            tracing::info!(
                subject = %output.record.email,
                role = %output.record.role,
                next = %next,
                "Session bridged"
            );
            let jar = store.write(jar, &output.record);
            (jar, Redirect::to(next.as_str())).into_response()
        }
        Err(e) => {
            let error: LoginError = bridge_error(&e);
            tracing::warn!(error = %e, marker = error.as_str(), "Session bridge failed");
            (jar, Redirect::to(&redirects::login_with_error(config, &error))).into_response()
        }
    }
}

// ============================================================================
// Set Session
// ============================================================================

/// POST /api/auth/set-session
pub async fn set_session<P, V>(
    State(state): State<AuthAppState<P, V>>,
    jar: CookieJar,
    body: Bytes,
) -> AuthResult<impl IntoResponse>
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    let req: SetSessionRequest = parse_body(&body);

    let use_case = WriteSessionUseCase::new(state.config.clone());
    let record = use_case.execute(WriteSessionInput {
        auth_token: req.pi_auth_token,
        user_data: req.user_data.map(Into::into),
    })?;

    let jar = CookieSessionStore::new(&state.config).write(jar, &record);

    Ok((jar, Json(SetSessionResponse { success: true })))
}

// ============================================================================
// Verify Session
// ============================================================================

/// GET /api/auth/verify-session
pub async fn verify_session<P, V>(
    State(state): State<AuthAppState<P, V>>,
    jar: CookieJar,
) -> Response
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    let stored = CookieSessionStore::new(&state.config).read(&jar);
    let status = CheckSessionUseCase::new(state.config.clone()).execute(&stored);

    let code = if status.authenticated {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (
        code,
        Json(VerifySessionResponse {
            authenticated: status.authenticated,
            email: status.email,
            role: status.role.map(|role| role.code().to_string()),
        }),
    )
        .into_response()
}

// ============================================================================
// Token Login
// ============================================================================

/// POST /api/auth/login, POST /api/auth/pi-login
pub async fn token_login<P, V>(
    State(state): State<AuthAppState<P, V>>,
    headers: HeaderMap,
    jar: CookieJar,
    body: Bytes,
) -> AuthResult<impl IntoResponse>
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    let req: LoginRequest = parse_body(&body);
    let client = extract_client_info(&headers, None);

    let use_case = TokenLoginUseCase::new(state.wallet.clone(), state.config.clone());
    let output = use_case
        .execute(TokenLoginInput {
            pi_auth_token: req.pi_auth_token,
        })
        .await?;

    tracing::info!(
        uid = %output.profile.uid,
        role = %output.profile.role,
        verified = output.profile.verified,
        degraded = output.profile.degraded,
        wallet_browser = client.is_wallet_browser(),
        ip = client.ip_string().as_deref().unwrap_or("-"),
        "Token login"
    );

    let jar = CookieSessionStore::new(&state.config).write(jar, &output.record);

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            user: output.profile,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<P, V>(
    State(state): State<AuthAppState<P, V>>,
    jar: CookieJar,
) -> impl IntoResponse
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    let jar = CookieSessionStore::new(&state.config).clear(jar);
    (StatusCode::NO_CONTENT, jar)
}

// ============================================================================
// Wallet Context
// ============================================================================

/// GET /api/auth/pi/context
pub async fn wallet_context(headers: HeaderMap) -> Json<WalletContextResponse> {
    let context = WalletContext::detect(extract_user_agent(&headers), false);
    Json(WalletContextResponse {
        wallet_browser: context.wallet_browser,
    })
}

/// Page paths this process does not serve
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
