//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, admin and route policies, port traits
//! - `application/` - Use cases and application services
//! - `infra/` - Cookie storage and identity provider clients
//! - `presentation/` - HTTP handlers, DTOs, router, request gate
//!
//! ## Features
//! - OAuth callback reconciliation (code exchange -> one-shot bundle cookie)
//! - Session bridge that consumes the bundle and issues the durable session
//! - Session writer, verifier, logout, and wallet-token login endpoints
//! - Request gate classifying every path as api / asset / admin / protected /
//!   auth page / public
//! - Wallet sign-in and one-shot client flag use cases for client-side callers
//!
//! ## Session Model
//! - No server-side session table: three HTTP-only cookies
//!   (`auth_token`, `user_email`, `user_role`) are the session
//! - Every durable cookie value is HMAC-SHA256 signed; bad signatures read as absent
//! - One admin policy decides roles for the writer, the login and the gate

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::hosted_auth::{HostedAuthClient, HostedAuthConfig};
pub use infra::pi_network::{PiNetworkClient, WalletApiConfig};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::cookie_session::CookieSessionStore as SessionStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
