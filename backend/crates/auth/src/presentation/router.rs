//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{IdentityProvider, SessionInstaller, WalletProfileVerifier};
use crate::infra::hosted_auth::HostedAuthClient;
use crate::infra::pi_network::PiNetworkClient;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{GateState, request_gate};

/// Create the Auth router with the hosted auth and wallet network clients
pub fn auth_router(
    provider: HostedAuthClient,
    wallet: PiNetworkClient,
    config: AuthConfig,
) -> Router {
    auth_router_generic(provider, wallet, config)
}

/// Create a generic Auth router for any provider implementation
///
/// The request gate wraps every route and the fallback, so page paths this
/// process does not serve are still gated before they 404.
pub fn auth_router_generic<P, V>(provider: P, wallet: V, config: AuthConfig) -> Router
where
    P: IdentityProvider + SessionInstaller + Send + Sync + 'static,
    V: WalletProfileVerifier + Send + Sync + 'static,
{
    let state = AuthAppState {
        provider: Arc::new(provider),
        wallet: Arc::new(wallet),
        config: Arc::new(config),
    };
    let gate = GateState {
        config: state.config.clone(),
    };

    let api = Router::new()
        .route("/set-session", post(handlers::set_session::<P, V>))
        .route("/verify-session", get(handlers::verify_session::<P, V>))
        .route("/login", post(handlers::token_login::<P, V>))
        .route("/pi-login", post(handlers::token_login::<P, V>))
        .route("/logout", post(handlers::logout::<P, V>))
        .route("/pi/context", get(handlers::wallet_context));

    Router::new()
        .nest("/api/auth", api)
        .route("/auth/callback", get(handlers::auth_callback::<P, V>))
        .route("/auth/processing", get(handlers::auth_processing::<P, V>))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(gate, request_gate))
}
