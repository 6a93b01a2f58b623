//! Distinguished Name canonicalization for an LDAP directory server.
//!
//! Every entry lookup, index key, ACL match and replica identity check
//! compares DNs through the canonical bytes produced here, so two DNs that
//! differ only in insignificant whitespace, separator spelling or quoting
//! convention must map to identical output. All operations are total: any
//! byte sequence yields a deterministic result and nothing is ever rejected.
//!
//! Two canonical forms exist side by side:
//! - [`legacy::normalize`] reproduces the version 3 index-key form;
//! - [`convert::normalize_convert`] additionally folds `\xx` escapes, strips
//!   redundant escapes and picks quoted or escaped values by separator count.
//!
//! [`Canonicalizer`] wraps both behind a [`Profile`] and reports what changed.
//!
#![deny(missing_docs)]

/// Canonicalizer facade with hygiene reporting.
pub mod canonicalizer;
/// Compatibility canonicalizer (hex folding and quote conversion).
pub mod convert;
/// Replication identity digests.
pub mod digest;
/// Canonical DN newtype.
pub mod dn;
/// Display expansion of DNs.
pub mod expand;
/// Hex digit decoding.
pub mod hex;
/// Hygiene report types emitted during canonicalization.
pub mod hygiene;
/// Legacy (version 3 index-key) canonicalizer.
pub mod legacy;
/// Canonicalization profiles.
pub mod profile;
mod scan;
/// Quoting-style detection.
pub mod style;
/// Validation errors for profile names and digests.
pub mod validation;

pub use canonicalizer::{CanonicalizationResult, Canonicalizer};
pub use convert::{normalize_convert, normalize_convert_in_place};
pub use digest::{Digest, DigestAlg};
pub use dn::CanonicalDn;
pub use expand::expand;
pub use hex::{hex_pair, hex_value};
pub use hygiene::{HygieneReport, HygieneStatus, HygieneWarning};
pub use legacy::{normalize, normalize_in_place};
pub use profile::Profile;
pub use style::{uses_legacy_quoting, QuotingStyle};
pub use validation::ValidationError;
