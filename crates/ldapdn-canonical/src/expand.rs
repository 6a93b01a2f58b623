//! Display form of a DN.

use crate::scan::{is_separator, is_space, Escape, State};

/// Returns a copy of `dn` with a space after every RDN or AVA separator that
/// is not already followed by whitespace.
///
/// Separators inside quoted or escaped values are left alone, so the scan
/// tracks quoting and escaping exactly like the canonicalizers do. Nothing
/// else is rewritten; the result is for display, not comparison.
pub fn expand(dn: impl AsRef<[u8]>) -> Vec<u8> {
    let dn = dn.as_ref();
    let mut out = Vec::with_capacity(dn.len() + dn.len() / 8);
    let mut state = State::BeforeType;
    let mut escape = Escape::default();

    for (i, &b) in dn.iter().enumerate() {
        let escaped = escape.take();
        out.push(b);
        let ends_component = match state {
            State::BeforeType => {
                if !is_space(b) {
                    state = State::InType;
                }
                false
            }
            State::InType => {
                if b == b'=' {
                    state = State::BeforeValue;
                } else if is_space(b) {
                    state = State::BeforeEqual;
                }
                false
            }
            State::BeforeEqual => {
                if b == b'=' {
                    state = State::BeforeValue;
                }
                false
            }
            State::BeforeValue => {
                if b == b'"' {
                    state = State::InQuotedValue;
                } else if !is_space(b) {
                    state = State::InValue;
                }
                false
            }
            State::InValue => !escaped && is_separator(b),
            State::InQuotedValue => {
                if !escaped && b == b'"' {
                    state = State::BeforeSeparator;
                }
                false
            }
            State::BeforeSeparator => is_separator(b),
        };
        if ends_component {
            state = State::BeforeType;
            if !dn.get(i + 1).is_some_and(|next| is_space(*next)) {
                out.push(b' ');
            }
        }
        escape.arm_after(b, escaped);
    }
    out
}
