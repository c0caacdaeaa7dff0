//! Infrastructure Layer
//!
//! Cookie storage, identity provider clients, and in-memory client state.

pub mod cookie_session;
pub mod hosted_auth;
mod http;
pub mod memory;
pub mod pi_network;
pub mod wallet_session;

pub use cookie_session::{CookieSessionStore, forwarded_cookies};
pub use hosted_auth::{HostedAuthClient, HostedAuthConfig};
pub use memory::{MemoryClientSessionStore, MemoryClientStorage};
pub use pi_network::{PiNetworkClient, WalletApiConfig};
pub use wallet_session::HttpWalletSessionVerifier;
