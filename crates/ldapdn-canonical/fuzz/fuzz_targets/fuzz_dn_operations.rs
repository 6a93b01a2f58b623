//! Fuzz target for the DN scanners.
//!
//! Every operation is total, so no input may panic, the output-length
//! bounds must hold for all of them, and canonical forms are fixed points.

#![no_main]

use ldapdn_canonical::{expand, uses_legacy_quoting, Canonicalizer, Profile};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct DnFuzzInput {
    dn: Vec<u8>,
    legacy_profile: bool,
    ignore_case: bool,
}

fuzz_target!(|input: DnFuzzInput| {
    let profile = if input.legacy_profile {
        Profile::Legacy
    } else {
        Profile::Compat
    };
    let canonicalizer = Canonicalizer::new(profile).ignore_case(input.ignore_case);

    let result = canonicalizer.canonicalize_with_report(&input.dn);
    if !input.ignore_case {
        assert!(result.dn.len() <= input.dn.len());
        assert_eq!(canonicalizer.canonicalize(&input.dn), result.dn);
        assert_eq!(canonicalizer.canonicalize(result.dn.as_bytes()), result.dn);
    }
    let _ = result.dn.identity();

    assert!(expand(&input.dn).len() <= input.dn.len() * 2);
    let _ = uses_legacy_quoting(&input.dn);
});
