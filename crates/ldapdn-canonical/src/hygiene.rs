use crate::profile::Profile;
use crate::style::QuotingStyle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hygiene status of a canonicalized DN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HygieneStatus {
    /// The input was already canonical.
    Ok,
    /// The input was rewritten to its canonical form.
    Normalized,
    /// The input used the deprecated LDAPv2 quoting style.
    Deprecated,
}

/// Stable warning code emitted by canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HygieneWarning(String);

impl HygieneWarning {
    /// The DN quotes values in the LDAPv2 style.
    pub const LEGACY_QUOTING: &'static str = "LegacyQuoting";
    /// A quoted value was still open at the end of the DN.
    pub const UNTERMINATED_QUOTE: &'static str = "UnterminatedQuote";
    /// The DN ends with a lone backslash.
    pub const DANGLING_ESCAPE: &'static str = "DanglingEscape";
    /// The last RDN has no `=`.
    pub const MISSING_EQUALS: &'static str = "MissingEquals";

    /// Creates a warning from a literal code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The warning code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Advisory report produced alongside a canonical DN. Never blocks an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HygieneReport {
    /// Overall hygiene status.
    pub status: HygieneStatus,
    /// Quoting style detected on the input.
    pub style: QuotingStyle,
    /// Stable warning codes.
    pub warnings: Vec<HygieneWarning>,
    /// Rewrite counters such as folded hex escapes.
    pub metrics: BTreeMap<String, u64>,
    /// Profile that produced the canonical bytes.
    pub profile: Profile,
}

impl HygieneReport {
    /// True if `code` was reported.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code() == code)
    }

    /// Value of a metric, zero if absent.
    pub fn metric(&self, name: &str) -> u64 {
        self.metrics.get(name).copied().unwrap_or(0)
    }
}
