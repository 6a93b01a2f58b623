//! Legacy DN canonicalizer.
//!
//! Produces the canonical form that version 3 index keys were built from:
//! whitespace around types, `=` and separators is dropped, `;` becomes `,`,
//! and values are otherwise copied verbatim (escapes and quotes included).

use crate::scan::{
    canonical_separator, ends_in_value, is_separator, is_space, trim_trailing_space, Escape,
    ScanOutcome, State,
};

/// Canonicalizes `dn` with the legacy rules.
///
/// Total over arbitrary bytes; the output is never longer than the input.
pub fn normalize(dn: impl AsRef<[u8]>) -> Vec<u8> {
    scan(dn.as_ref()).0
}

/// Runs the legacy scan, returning the output, the RDN count and how the scan ended.
pub(crate) fn scan(dn: &[u8]) -> (Vec<u8>, u64, ScanOutcome) {
    let mut rdns = 0;
    let mut out = Vec::with_capacity(dn.len());
    let mut state = State::BeforeType;
    let mut escape = Escape::default();
    // Trailing whitespace below this index is escaped data and is never trimmed.
    let mut floor = 0;

    for &b in dn {
        let escaped = escape.take();
        match state {
            State::BeforeType => {
                if !is_space(b) {
                    state = State::InType;
                    out.push(b);
                }
            }
            State::InType => {
                if b == b'=' {
                    state = State::BeforeValue;
                    out.push(b);
                } else if is_space(b) {
                    state = State::BeforeEqual;
                } else {
                    out.push(b);
                }
            }
            State::BeforeEqual => {
                if b == b'=' {
                    state = State::BeforeValue;
                    out.push(b);
                } else if !is_space(b) {
                    // Not a valid DN; keep the byte and carry on.
                    out.push(b);
                }
            }
            State::BeforeValue => {
                if !is_space(b) {
                    state = if b == b'"' {
                        State::InQuotedValue
                    } else {
                        State::InValue
                    };
                    out.push(b);
                    floor = out.len();
                }
            }
            State::InValue => {
                if !escaped && is_separator(b) {
                    trim_trailing_space(&mut out, floor);
                    out.push(canonical_separator(b));
                    state = State::BeforeType;
                    rdns += 1;
                } else {
                    out.push(b);
                    if escaped {
                        floor = out.len();
                    }
                }
            }
            State::InQuotedValue => {
                out.push(b);
                if !escaped && b == b'"' {
                    state = State::BeforeSeparator;
                }
            }
            State::BeforeSeparator => {
                if is_separator(b) {
                    out.push(canonical_separator(b));
                    state = State::BeforeType;
                    rdns += 1;
                }
            }
        }
        escape.arm_after(b, escaped);
    }
    if ends_in_value(state) {
        rdns += 1;
    }
    (out, rdns, ScanOutcome::at_end(state, escape))
}

/// Replaces the contents of `dn` with its legacy canonical form, reusing the allocation.
pub fn normalize_in_place(dn: &mut Vec<u8>) {
    let canonical = normalize(dn.as_slice());
    dn.clear();
    dn.extend_from_slice(&canonical);
}
