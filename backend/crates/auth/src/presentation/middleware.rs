//! Request Gate Middleware
//!
//! Runs on every request: reads the cookie session, asks the gate, and either
//! passes the request on or redirects.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use platform::client::extract_client_ip;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{GateDecision, RequestGate};
use crate::infra::cookie_session::CookieSessionStore;

/// Middleware state
#[derive(Clone)]
pub struct GateState {
    pub config: Arc<AuthConfig>,
}

/// Middleware that applies route classification to every request
pub async fn request_gate(
    State(state): State<GateState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(req.headers());
    let stored = CookieSessionStore::new(&state.config).read(&jar);

    let decision = RequestGate::new(&state.config).decide(req.uri().path(), &stored);

    match decision {
        GateDecision::Continue => next.run(req).await,
        GateDecision::Redirect { location, reason } => {
            let client_ip = req
                .extensions()
                .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
                .map(|info| info.0.ip());
            let client_ip = extract_client_ip(req.headers(), client_ip);

            tracing::debug!(
                path = %req.uri().path(),
                location = %location,
                reason = reason.map(|r| r.as_str()).unwrap_or("-"),
                ip = ?client_ip,
                "Request gated"
            );
            Redirect::temporary(&location).into_response()
        }
    }
}
