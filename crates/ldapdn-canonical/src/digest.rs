use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;

use crate::dn::CanonicalDn;
use crate::validation::ValidationError;

/// Domain separator for DN identities: `b"ldapdn:identity:v1\0"`.
const IDENTITY_DOMAIN_SEPARATOR: &[u8] = b"ldapdn:identity:v1\0";

/// SHA-256 output length in bytes.
const SHA256_LEN: usize = 32;

/// Supported digest algorithms for DN identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

impl Digest {
    /// Constructs a validated digest.
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        let expected = match alg {
            DigestAlg::Sha256 => SHA256_LEN,
        };
        match URL_SAFE_NO_PAD.decode(&b64) {
            Ok(bytes) if bytes.len() == expected => Ok(Digest { alg, b64 }),
            _ => Err(ValidationError::InvalidDigest {
                field: "digest",
                value: b64,
                expected,
            }),
        }
    }

    /// Identity of a canonical DN: `sha256(domain_separator || canonical_bytes)`.
    ///
    /// Two servers agree on an entry's identity exactly when they agree on
    /// its canonical DN.
    pub fn of_canonical(dn: &CanonicalDn) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(IDENTITY_DOMAIN_SEPARATOR);
        hasher.update(dn.as_bytes());
        Digest {
            alg: DigestAlg::Sha256,
            b64: URL_SAFE_NO_PAD.encode(hasher.finalize()),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.b64)
    }
}
