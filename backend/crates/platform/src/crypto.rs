//! Cryptographic Utilities
//!
//! Signing is `HMAC-SHA256` over `name=value`, encoded base64url without padding,
//! appended to the value after a `.`. Binding the cookie name into the MAC keeps a
//! valid signature from one cookie from being replayed under another name.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Separator between a value and its signature
pub const SIGNATURE_SEPARATOR: char = '.';

/// Generate a random 32-byte secret
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    rand::rng().fill_bytes(&mut secret);
    secret
}

/// Encode bytes as base64url (no padding)
pub fn to_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode base64url (no padding)
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(s)
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    // HMAC accepts keys of any length
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .unwrap_or_else(|_| unreachable!("HMAC can take key of any size"));
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Sign `value` for cookie `name`, returning `value.signature`
pub fn sign_value(key: &[u8], name: &str, value: &str) -> String {
    let signature = hmac_sha256(key, signing_input(name, value).as_bytes());
    format!("{value}{SIGNATURE_SEPARATOR}{}", to_base64url(&signature))
}

/// Verify a `value.signature` string produced by [`sign_value`]
///
/// Returns the original value when the signature matches, `None` otherwise.
/// The comparison is constant-time.
pub fn verify_signed_value(key: &[u8], name: &str, signed: &str) -> Option<String> {
    let (value, signature_b64) = signed.rsplit_once(SIGNATURE_SEPARATOR)?;
    let signature = from_base64url(signature_b64).ok()?;

    let mut mac = <HmacSha256 as Mac>::new_from_slice(key).ok()?;
    mac.update(signing_input(name, value).as_bytes());
    mac.verify_slice(&signature).ok()?;

    Some(value.to_string())
}

fn signing_input(name: &str, value: &str) -> String {
    format!("{name}={value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret() {
        let a = random_secret();
        let b = random_secret();
        assert_ne!(a, b);
        assert!(a.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn test_hmac_rfc4231_case_2() {
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_sign_and_verify() {
        let key = [7u8; 32];
        let signed = sign_value(&key, "auth_token", "tok123");

        assert!(signed.starts_with("tok123."));
        assert_eq!(
            verify_signed_value(&key, "auth_token", &signed),
            Some("tok123".to_string())
        );
    }

    #[test]
    fn test_value_containing_separator() {
        let key = [7u8; 32];
        let signed = sign_value(&key, "user_email", "first.last@example.com");
        assert_eq!(
            verify_signed_value(&key, "user_email", &signed),
            Some("first.last@example.com".to_string())
        );
    }

    #[test]
    fn test_signature_bound_to_name() {
        let key = [7u8; 32];
        let signed = sign_value(&key, "user_email", "admin");
        assert_eq!(verify_signed_value(&key, "user_role", &signed), None);
    }

    #[test]
    fn test_tampered_or_unsigned_value_rejected() {
        let key = [7u8; 32];
        let signed = sign_value(&key, "user_role", "user");
        let (_, signature) = signed.rsplit_once('.').unwrap();
        let forged = format!("admin.{signature}");

        assert_eq!(verify_signed_value(&key, "user_role", &forged), None);
        assert_eq!(verify_signed_value(&key, "user_role", "admin"), None);
        assert_eq!(verify_signed_value(&[8u8; 32], "user_role", &signed), None);
    }
}
