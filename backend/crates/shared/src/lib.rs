//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by every crate:
//! - Common error types and result aliases
//! - HTTP status classification of failures
//!
//! Only things that are hard to change and mean the same thing everywhere belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
