//! Domain Layer
//!
//! Contains entities, value objects, policies, and port traits.

pub mod entity;
pub mod policy;
pub mod repository;
pub mod route_policy;
pub mod value_object;

// Re-exports
pub use entity::{Identity, OAuthBundle, ProviderTokens, SessionRecord, StoredSession};
pub use policy::{AdminPolicy, DEFAULT_ADMIN_EMAIL};
pub use repository::{
    ClientSessionStore, ClientStorage, ForwardedCookies, IdentityProvider, SessionInstaller,
    WalletProfileVerifier, WalletSdk, WalletSessionVerifier,
};
pub use route_policy::{RouteClass, RoutePolicy};
