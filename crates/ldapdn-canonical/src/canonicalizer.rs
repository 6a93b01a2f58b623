use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::digest::Digest;
use crate::dn::CanonicalDn;
use crate::hygiene::{HygieneReport, HygieneStatus, HygieneWarning};
use crate::profile::Profile;
use crate::scan::ScanOutcome;
use crate::style::QuotingStyle;
use crate::{convert, legacy};

/// Result of canonicalization.
#[derive(Debug, Clone)]
pub struct CanonicalizationResult {
    /// Canonical DN.
    pub dn: CanonicalDn,
    /// Advisory report describing what was rewritten.
    pub report: HygieneReport,
}

/// Canonicalizer that maps DNs to their comparison- and index-stable form.
///
/// Stateless apart from its settings; one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Canonicalizer {
    profile: Profile,
    ignore_case: bool,
}

impl Canonicalizer {
    /// Creates a new canonicalizer for the provided profile.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ignore_case: false,
        }
    }

    /// Also case-folds the canonical form (for case-insensitive keys).
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Profile in use.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Produces the canonical DN. Never fails.
    pub fn canonicalize(&self, dn: impl AsRef<[u8]>) -> CanonicalDn {
        self.wrap(self.profile.apply(dn.as_ref()))
    }

    /// Produces the canonical DN plus a hygiene report.
    pub fn canonicalize_with_report(&self, dn: impl AsRef<[u8]>) -> CanonicalizationResult {
        let input = dn.as_ref();
        let style = QuotingStyle::detect(input);
        let mut metrics = BTreeMap::new();

        let (bytes, outcome) = match self.profile {
            Profile::Legacy => {
                let (bytes, rdns, outcome) = legacy::scan(input);
                metrics.insert("rdns".to_string(), rdns);
                (bytes, outcome)
            }
            Profile::Compat => {
                let (bytes, stats, outcome) = convert::convert_with_stats(input);
                metrics.insert("rdns".to_string(), stats.rdns);
                metrics.insert("hex_escapes_folded".to_string(), stats.hex_escapes_folded);
                metrics.insert("escapes_stripped".to_string(), stats.escapes_stripped);
                metrics.insert("values_quoted".to_string(), stats.values_quoted);
                metrics.insert("values_unquoted".to_string(), stats.values_unquoted);
                metrics.insert("rdns_reordered".to_string(), stats.rdns_reordered);
                (bytes, outcome)
            }
        };
        let dn = self.wrap(bytes);

        let warnings = collect_warnings(style, outcome);
        let status = if style == QuotingStyle::Legacy {
            HygieneStatus::Deprecated
        } else if dn.as_bytes() == input {
            HygieneStatus::Ok
        } else {
            HygieneStatus::Normalized
        };

        if status == HygieneStatus::Deprecated && self.profile == Profile::Compat {
            warn!(
                original = %String::from_utf8_lossy(input),
                converted = %dn,
                "DN is quoted in the deprecated LDAPv2 style; converted to the LDAPv3 escaped format"
            );
        }
        debug!(
            profile = %self.profile,
            status = ?status,
            warnings = warnings.len(),
            "canonicalized DN"
        );

        CanonicalizationResult {
            dn,
            report: HygieneReport {
                status,
                style,
                warnings,
                metrics,
                profile: self.profile,
            },
        }
    }

    /// True if `a` and `b` name the same entry, i.e. share a canonical form.
    pub fn same_entry(&self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
        self.canonicalize(a) == self.canonicalize(b)
    }

    /// Replication identity of `dn`.
    pub fn identity(&self, dn: impl AsRef<[u8]>) -> Digest {
        self.canonicalize(dn).identity()
    }

    fn wrap(&self, bytes: Vec<u8>) -> CanonicalDn {
        let dn = CanonicalDn::from_canonical(bytes);
        if self.ignore_case {
            dn.fold_case()
        } else {
            dn
        }
    }
}

fn collect_warnings(style: QuotingStyle, outcome: ScanOutcome) -> Vec<HygieneWarning> {
    let mut warnings = Vec::new();
    if style == QuotingStyle::Legacy {
        warnings.push(HygieneWarning::new(HygieneWarning::LEGACY_QUOTING));
    }
    if outcome.unterminated_quote {
        warnings.push(HygieneWarning::new(HygieneWarning::UNTERMINATED_QUOTE));
    }
    if outcome.dangling_escape {
        warnings.push(HygieneWarning::new(HygieneWarning::DANGLING_ESCAPE));
    }
    if outcome.missing_equals {
        warnings.push(HygieneWarning::new(HygieneWarning::MISSING_EQUALS));
    }
    warnings
}
