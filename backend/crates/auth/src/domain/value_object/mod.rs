//! Value Object Module

pub mod next_path;
pub mod redirect_error;
pub mod user_role;

pub use next_path::NextPath;
pub use redirect_error::RedirectError;
pub use user_role::UserRole;
