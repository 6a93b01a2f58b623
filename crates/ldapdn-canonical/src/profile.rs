use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Canonicalization rules applied to a DN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Version 3 index-key form: whitespace and separators only.
    Legacy,
    /// Legacy form plus hex folding, escape stripping and quote conversion.
    #[default]
    Compat,
}

impl Profile {
    /// Canonicalizes `dn` under this profile.
    pub fn apply(self, dn: &[u8]) -> Vec<u8> {
        match self {
            Profile::Legacy => crate::legacy::normalize(dn),
            Profile::Compat => crate::convert::normalize_convert(dn),
        }
    }

    /// Stable profile name.
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Legacy => "legacy",
            Profile::Compat => "compat",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "v3" => Ok(Profile::Legacy),
            "compat" | "convert" => Ok(Profile::Compat),
            _ => Err(ValidationError::UnknownProfile(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("legacy".parse::<Profile>(), Ok(Profile::Legacy));
        assert_eq!("V3".parse::<Profile>(), Ok(Profile::Legacy));
        assert_eq!(" compat ".parse::<Profile>(), Ok(Profile::Compat));
        assert_eq!("convert".parse::<Profile>(), Ok(Profile::Compat));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "rfc4514".parse::<Profile>(),
            Err(ValidationError::UnknownProfile("rfc4514".into()))
        );
    }

    #[test]
    fn display_round_trips() {
        for profile in [Profile::Legacy, Profile::Compat] {
            assert_eq!(profile.to_string().parse::<Profile>(), Ok(profile));
        }
    }
}
