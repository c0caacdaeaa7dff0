//! Entity Module

pub mod identity;
pub mod oauth_bundle;
pub mod profile;
pub mod session_record;
pub mod wallet;

pub use identity::Identity;
pub use oauth_bundle::{OAuthBundle, ProviderTokens};
pub use profile::UserProfile;
pub use session_record::{SessionRecord, StoredSession};
pub use wallet::{IncompletePayment, WalletAuthResult, WalletContext, WalletScope, WalletUser};
