//! Tenant identity derived from bearer credentials.
//!
//! Every caller is identified solely by the credential it presents. The
//! credential is hashed (SHA-256) and truncated to a short hex string that
//! serves as the partition key for all stored data. The identifier is
//! recomputed on every request and never persisted as sensitive data.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Returned when a tenant identifier is derived from an empty credential.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("credential must not be empty")]
pub struct EmptyCredential;

/// A stable, opaque identifier for a single caller.
///
/// Derivation is deterministic: the same credential always yields the same
/// identifier, across requests and process restarts. It is one-way: the
/// credential cannot be recovered from the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Length of a tenant identifier in characters.
    pub const LEN: usize = 16;

    /// Derives a tenant identifier from a credential.
    ///
    /// The full credential string is hashed; the identifier is the first
    /// eight bytes of the digest rendered as lowercase hex.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCredential`] if the credential is empty. Callers are
    /// expected to reject empty credentials before reaching this point.
    pub fn derive(credential: &str) -> Result<Self, EmptyCredential> {
        if credential.is_empty() {
            return Err(EmptyCredential);
        }

        const HEX: &[u8; 16] = b"0123456789abcdef";

        let digest = Sha256::digest(credential.as_bytes());
        let mut id = String::with_capacity(Self::LEN);
        for byte in &digest[..Self::LEN / 2] {
            id.push(char::from(HEX[usize::from(byte >> 4)]));
            id.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }

        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[test]
    fn test_derive_known_vector() {
        // SHA-256("abc") begins ba7816bf8f01cfea...
        let id = TenantId::derive("abc").unwrap();
        assert_eq!(id.as_str(), "ba7816bf8f01cfea");
    }

    #[rstest]
    #[case("Bearer alpha-token")]
    #[case("Bearer beta-token")]
    #[case("x")]
    #[case("a much longer credential with spaces and unicode: caf\u{e9}")]
    fn test_derive_is_deterministic(#[case] credential: &str) {
        let first = TenantId::derive(credential).unwrap();
        let second = TenantId::derive(credential).unwrap();
        assert_eq!(first, second);
    }

    #[rstest]
    #[case("Bearer alpha-token")]
    #[case("Bearer beta-token")]
    fn test_derive_shape(#[case] credential: &str) {
        let id = TenantId::derive(credential).unwrap();
        assert_eq!(id.as_str().len(), TenantId::LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_distinct_credentials_yield_distinct_ids() {
        let mut seen = HashSet::new();
        for i in 0..10_000 {
            let id = TenantId::derive(&format!("Bearer token-{i}")).unwrap();
            assert!(seen.insert(id.as_str().to_string()), "collision at token-{i}");
        }
    }

    #[test]
    fn test_prefix_is_part_of_identity() {
        // The whole header value is hashed, so the same token with and
        // without the Bearer prefix maps to different tenants.
        let with_prefix = TenantId::derive("Bearer secret").unwrap();
        let bare = TenantId::derive("secret").unwrap();
        assert_ne!(with_prefix, bare);
    }

    #[test]
    fn test_empty_credential_is_rejected() {
        assert_eq!(TenantId::derive(""), Err(EmptyCredential));
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = TenantId::derive("Bearer display").unwrap();
        assert_eq!(id.to_string(), id.as_str());
    }
}
