//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie wire format (attributes, removal, header lookup)
//! - HMAC-SHA256 value signing for tamper-evident cookies
//! - Client identification from request headers

pub mod client;
pub mod cookie;
pub mod crypto;
