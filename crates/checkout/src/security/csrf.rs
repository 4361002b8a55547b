//! CSRF tokens, CSP nonces and the Content-Security-Policy header.

use std::fmt::Write;

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;

/// Length of a hex-encoded CSRF token (32 random bytes).
const CSRF_TOKEN_LENGTH: usize = 64;

/// Generate a CSRF token: 32 random bytes, hex-encoded.
#[must_use]
pub fn generate_csrf_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    bytes
        .iter()
        .fold(String::with_capacity(CSRF_TOKEN_LENGTH), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
}

/// Whether `token` matches the stored token and has the expected length.
#[must_use]
pub fn validate_csrf_token(token: &str, stored: &str) -> bool {
    token.len() == CSRF_TOKEN_LENGTH && token == stored
}

/// A CSP nonce value for inline scripts.
///
/// Each render gets a unique, cryptographically random nonce (128-bit, base64-encoded).
#[derive(Clone, Debug)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Generate a new random nonce.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Self(STANDARD.encode(bytes))
    }

    /// Get the nonce value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Build the Content-Security-Policy header value.
///
/// With a nonce, inline scripts must carry it instead of relying on
/// `'unsafe-inline'`.
#[must_use]
pub fn generate_csp_header(nonce: Option<&CspNonce>) -> String {
    let script_src = nonce.map_or_else(
        || "script-src 'self' 'unsafe-inline' 'unsafe-eval'".to_string(),
        |nonce| format!("script-src 'self' 'nonce-{}'", nonce.value()),
    );

    [
        "default-src 'self'",
        script_src.as_str(),
        "style-src 'self' 'unsafe-inline'",
        "img-src 'self' data: https:",
        "font-src 'self' data:",
        "connect-src 'self'",
        "frame-ancestors 'none'",
        "base-uri 'self'",
        "form-action 'self'",
    ]
    .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csrf_token_shape() {
        let token = generate_csrf_token();
        assert_eq!(token.len(), CSRF_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_csrf_token());
    }

    #[test]
    fn test_validate_csrf_token() {
        let token = generate_csrf_token();
        assert!(validate_csrf_token(&token, &token));
        assert!(!validate_csrf_token(&token, &generate_csrf_token()));
        assert!(!validate_csrf_token("abc", "abc"));
    }

    #[test]
    fn test_csp_header_without_nonce() {
        let header = generate_csp_header(None);
        assert!(header.starts_with("default-src 'self'; script-src 'self' 'unsafe-inline'"));
        assert!(header.ends_with("form-action 'self'"));
        assert_eq!(header.matches("; ").count(), 8);
    }

    #[test]
    fn test_csp_header_with_nonce() {
        let nonce = CspNonce::generate();
        let header = generate_csp_header(Some(&nonce));
        assert!(header.contains(&format!("'nonce-{}'", nonce.value())));
        assert!(!header.contains("unsafe-eval"));
    }

    #[test]
    fn test_nonce_is_base64_of_16_bytes() {
        let nonce = CspNonce::generate();
        assert_eq!(STANDARD.decode(nonce.value()).map(|b| b.len()).ok(), Some(16));
    }
}
