use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

use crate::digest::Digest;

/// A DN in canonical form.
///
/// Holds bytes rather than a `String`: folding `\xx` escapes can yield bytes
/// that are not UTF-8. Ordering and hashing are plain byte comparisons, which
/// is what index keys sort on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDn(Vec<u8>);

impl CanonicalDn {
    /// Wraps bytes already produced by a canonicalizer.
    pub(crate) fn from_canonical(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the DN, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// The DN as UTF-8, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// The DN as text, replacing invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty DN (the root DSE).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-folded copy used for case-insensitive keys.
    ///
    /// UTF-8 input is lowercased per Unicode; other bytes are folded as ASCII.
    pub fn fold_case(&self) -> CanonicalDn {
        match self.as_str() {
            Some(s) => CanonicalDn(s.to_lowercase().into_bytes()),
            None => CanonicalDn(self.0.to_ascii_lowercase()),
        }
    }

    /// Replication identity of this DN.
    pub fn identity(&self) -> Digest {
        Digest::of_canonical(self)
    }
}

impl AsRef<[u8]> for CanonicalDn {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for CanonicalDn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl PartialEq<str> for CanonicalDn {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for CanonicalDn {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl Serialize for CanonicalDn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_accessors() {
        let dn = CanonicalDn::from_canonical(b"cn=Bob,o=Example".to_vec());
        assert_eq!(dn.as_str(), Some("cn=Bob,o=Example"));
        assert_eq!(dn.len(), 16);
        assert!(!dn.is_empty());
        assert_eq!(dn, "cn=Bob,o=Example");
    }

    #[test]
    fn non_utf8_is_displayed_lossily() {
        let dn = CanonicalDn::from_canonical(b"cn=\xff".to_vec());
        assert_eq!(dn.as_str(), None);
        assert_eq!(dn.to_string(), "cn=\u{fffd}");
    }

    #[test]
    fn fold_case_lowercases() {
        let dn = CanonicalDn::from_canonical("CN=Émile,O=Example".as_bytes().to_vec());
        assert_eq!(dn.fold_case(), "cn=émile,o=example");
        let raw = CanonicalDn::from_canonical(b"CN=\xff".to_vec());
        assert_eq!(raw.fold_case().as_bytes(), b"cn=\xff");
    }

    #[test]
    fn orders_by_bytes() {
        let a = CanonicalDn::from_canonical(b"cn=a,o=x".to_vec());
        let b = CanonicalDn::from_canonical(b"cn=b,o=x".to_vec());
        assert!(a < b);
    }
}
