//! Application Layer
//!
//! Use cases and application services.

pub mod bridge_session;
pub mod check_session;
pub mod config;
pub mod exchange_code;
pub mod gate;
pub mod one_shot;
pub mod redirects;
pub mod token_login;
pub mod wallet_sign_in;
pub mod write_session;

// Re-exports
pub use bridge_session::{BridgeOutput, BridgeSessionUseCase, bridge_error};
pub use check_session::{CheckSessionUseCase, SessionStatus};
pub use config::AuthConfig;
pub use exchange_code::{ExchangeCodeUseCase, callback_marker};
pub use gate::{GateDecision, RequestGate};
pub use one_shot::{DEMO_CLEANUP_KEY, OneShotFlag};
pub use redirects::LoginError;
pub use token_login::{TokenLoginInput, TokenLoginOutput, TokenLoginUseCase};
pub use wallet_sign_in::{WalletSignInOutcome, WalletSignInUseCase};
pub use write_session::{WriteSessionInput, WriteSessionUseCase};
