use thiserror::Error;

/// Validation errors for caller-supplied canonicalization parameters.
///
/// DN canonicalization itself never fails; these cover the names and
/// digests that configuration and tooling hand to the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The profile name is not one of the known canonicalization profiles.
    #[error("unknown canonicalization profile '{0}' (expected 'legacy' or 'compat')")]
    UnknownProfile(String),
    /// A digest did not decode to the expected number of bytes.
    #[error("{field} ('{value}') is not a valid {expected}-byte base64url digest")]
    InvalidDigest {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Expected decoded length in bytes.
        expected: usize,
    },
}
