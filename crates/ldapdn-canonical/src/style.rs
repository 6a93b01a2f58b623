//! Detection of the deprecated LDAPv2 (quoted-value) DN style.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Textual convention used to protect special characters in DN values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuotingStyle {
    /// Values wrapped in `"…"` with specials left bare (LDAPv2 / RFC 1779).
    Legacy,
    /// Unquoted values with specials backslash-escaped (LDAPv3 / RFC 2253).
    Modern,
}

impl QuotingStyle {
    /// Classifies `dn` with [`uses_legacy_quoting`].
    pub fn detect(dn: impl AsRef<[u8]>) -> Self {
        if uses_legacy_quoting(dn) {
            QuotingStyle::Legacy
        } else {
            QuotingStyle::Modern
        }
    }

    /// Lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            QuotingStyle::Legacy => "legacy",
            QuotingStyle::Modern => "modern",
        }
    }
}

impl fmt::Display for QuotingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if `dn` is quoted in the legacy style.
///
/// Only the first `"` is inspected: it is a real quote when preceded by an
/// even number (including zero) of backslashes. A DN whose first quote is
/// escaped reports `false` even if a later quote is real; stored index keys
/// were computed under this rule, so it is kept.
pub fn uses_legacy_quoting(dn: impl AsRef<[u8]>) -> bool {
    let dn = dn.as_ref();
    let Some(quote) = dn.iter().position(|&b| b == b'"') else {
        return false;
    };
    let backslashes = dn[..quote]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_quote_is_legacy() {
        assert!(uses_legacy_quoting(r#"cn="Bob Smith",o=Example"#));
        assert_eq!(
            QuotingStyle::detect(r#"cn="Bob Smith",o=Example"#),
            QuotingStyle::Legacy
        );
    }

    #[test]
    fn escaped_quote_is_data() {
        assert!(!uses_legacy_quoting(r#"cn=Bob\"Smith,o=Example"#));
        assert!(!uses_legacy_quoting(r"cn=Bob\22Smith,o=Example"));
    }

    #[test]
    fn escaped_backslash_before_quote_leaves_quote_real() {
        assert!(uses_legacy_quoting(r#"cn=a\\"b",o=x"#));
        assert!(!uses_legacy_quoting(r#"cn=a\\\"b,o=x"#));
    }

    #[test]
    fn no_quote_is_modern() {
        assert!(!uses_legacy_quoting("cn=Bob,o=Example"));
        assert!(!uses_legacy_quoting(""));
    }

    #[test]
    fn only_first_quote_is_considered() {
        assert!(!uses_legacy_quoting(r#"cn=a\"b,ou="c, d",o=x"#));
    }

    #[test]
    fn leading_quote_is_legacy() {
        assert!(uses_legacy_quoting("\""));
    }

    #[test]
    fn display_matches_serialized_name() {
        assert_eq!(QuotingStyle::Legacy.to_string(), "legacy");
        assert_eq!(QuotingStyle::Modern.as_str(), "modern");
    }
}
