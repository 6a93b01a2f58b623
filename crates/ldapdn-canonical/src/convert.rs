//! Compatibility DN canonicalizer.
//!
//! Same scan as [`crate::legacy`], plus:
//! - `\xx` inside a value is folded to the byte it names, except `\00` which is kept verbatim;
//! - `\c` becomes `c` unless `c` is `\` or `"`, or unescaping would move a value boundary;
//! - values with two or more embedded separators are quoted, all other values are unquoted;
//! - the AVAs of a multi-valued RDN are put in case-insensitive order;
//! - trailing whitespace of the whole DN is trimmed.
//!
//! The result compares equal, byte for byte, with keys computed by earlier
//! directory server releases, so every rule here is load-bearing.

use std::cmp::Ordering;
use std::ops::Range;

use crate::hex::hex_pair;
use crate::scan::{
    canonical_separator, ends_in_value, is_separator, is_space, needs_escape,
    trim_trailing_space, Escape, ScanOutcome, State,
};

/// How many separators a value has carried so far.
///
/// The quoting decision depends on telling "one" apart from "two or more";
/// for a single separator its output position is kept so that an unquoted
/// rewrite can escape it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmbeddedSeparators {
    None,
    One(usize),
    TwoOrMore,
}

impl EmbeddedSeparators {
    fn record(&mut self, at: usize) {
        *self = match *self {
            EmbeddedSeparators::None => EmbeddedSeparators::One(at),
            EmbeddedSeparators::One(_) | EmbeddedSeparators::TwoOrMore => {
                EmbeddedSeparators::TwoOrMore
            }
        };
    }
}

/// Bytes that keep their escape when they open an unquoted value.
const fn leads_with_escape(b: u8) -> bool {
    is_space(b) || b == b'#'
}

/// Case-insensitive order on `type=value` bytes, ties broken on the raw bytes.
fn compare_avas(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase))
        .then_with(|| a.cmp(b))
}

/// Rewrite counters gathered during one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ConvertStats {
    pub rdns: u64,
    pub hex_escapes_folded: u64,
    pub escapes_stripped: u64,
    pub values_quoted: u64,
    pub values_unquoted: u64,
    pub rdns_reordered: u64,
}

struct Converter {
    out: Vec<u8>,
    state: State,
    /// Output index of the first value byte (the opening quote for quoted values).
    value_start: usize,
    separators: EmbeddedSeparators,
    /// Trimming an unquoted value stops here, just past its last kept escape.
    escaped_floor: usize,
    /// Output index and byte of the last escape stripped in the current value.
    last_stripped: Option<(usize, u8)>,
    /// The current unquoted value holds an unescaped `"`.
    bare_quote: bool,
    /// Output index of the first byte of the current AVA.
    ava_start: usize,
    /// Completed AVAs of the current RDN, in output order.
    avas: Vec<Range<usize>>,
    /// The final trim never removes bytes below this index.
    trim_floor: usize,
    stats: ConvertStats,
}

impl Converter {
    fn new(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            state: State::BeforeType,
            value_start: 0,
            separators: EmbeddedSeparators::None,
            escaped_floor: 0,
            last_stripped: None,
            bare_quote: false,
            ava_start: 0,
            avas: Vec::new(),
            trim_floor: 0,
            stats: ConvertStats::default(),
        }
    }

    fn in_value(&self) -> bool {
        matches!(self.state, State::InValue | State::InQuotedValue)
    }

    fn step(&mut self, b: u8, escaped: bool) {
        match self.state {
            State::BeforeType => {
                if !is_space(b) {
                    self.ava_start = self.out.len();
                    self.state = State::InType;
                    self.out.push(b);
                }
            }
            State::InType => {
                if b == b'=' {
                    self.state = State::BeforeValue;
                    self.out.push(b);
                } else if is_space(b) {
                    self.state = State::BeforeEqual;
                } else {
                    self.out.push(b);
                }
            }
            State::BeforeEqual => {
                if b == b'=' {
                    self.state = State::BeforeValue;
                    self.out.push(b);
                } else if !is_space(b) {
                    self.out.push(b);
                }
            }
            State::BeforeValue => {
                if !is_space(b) {
                    self.value_start = self.out.len();
                    self.separators = EmbeddedSeparators::None;
                    self.escaped_floor = self.value_start;
                    self.last_stripped = None;
                    self.bare_quote = false;
                    self.state = if b == b'"' {
                        State::InQuotedValue
                    } else {
                        State::InValue
                    };
                    self.out.push(b);
                }
            }
            State::InValue => {
                if escaped {
                    // The backslash is the first byte of the value.
                    let leading = self.out.len() == self.value_start + 1;
                    let separator = is_separator(b);
                    if separator {
                        self.separators.record(self.out.len());
                    }
                    if separator || needs_escape(b) || (leading && leads_with_escape(b)) {
                        self.out.push(b);
                        self.escaped_floor = self.out.len();
                    } else {
                        if self.strip_escape() {
                            self.last_stripped = Some((self.out.len(), b));
                        }
                        self.out.push(b);
                    }
                } else if is_separator(b) {
                    self.finish_unquoted_value(false);
                    self.end_ava(b);
                } else {
                    if b == b'"' {
                        self.bare_quote = true;
                    }
                    self.out.push(b);
                }
            }
            State::InQuotedValue => {
                if escaped {
                    if !needs_escape(b) {
                        self.strip_escape();
                    }
                } else if b == b'"' {
                    self.state = State::BeforeSeparator;
                    self.finish_quoted_value();
                    return;
                }
                if is_separator(b) {
                    self.separators.record(self.out.len());
                }
                self.out.push(b);
            }
            State::BeforeSeparator => {
                if is_separator(b) {
                    self.end_ava(b);
                }
            }
        }
    }

    fn strip_escape(&mut self) -> bool {
        if self.out.last() != Some(&b'\\') {
            return false;
        }
        self.out.pop();
        self.stats.escapes_stripped += 1;
        true
    }

    /// Closes the current AVA at `separator`; an RDN separator also closes the RDN.
    fn end_ava(&mut self, separator: u8) {
        self.avas.push(self.ava_start..self.out.len());
        let separator = canonical_separator(separator);
        if separator != b'+' {
            self.sort_avas();
        }
        self.out.push(separator);
        self.state = State::BeforeType;
        self.stats.rdns += 1;
    }

    /// Rewrites the completed AVAs of the current RDN in sorted order.
    fn sort_avas(&mut self) {
        let avas = std::mem::take(&mut self.avas);
        let (Some(first), Some(last)) = (avas.first(), avas.last()) else {
            return;
        };
        if avas.len() < 2 {
            return;
        }
        // The AVAs are contiguous, one `+` apart, so the sorted join has the same length.
        let region = first.start..last.end;
        let sorted = {
            let mut pieces: Vec<&[u8]> = avas.iter().map(|ava| &self.out[ava.clone()]).collect();
            pieces.sort_by(|a, b| compare_avas(a, b));
            pieces.join(&b'+')
        };
        if self.out[region.clone()] != sorted[..] {
            self.out[region].copy_from_slice(&sorted);
            self.stats.rdns_reordered += 1;
        }
    }

    /// Trims an unquoted value and quotes it if it holds two or more separators.
    ///
    /// A value that holds a bare `"`, or ends in a dangling escape, has no
    /// quoted spelling and stays unquoted.
    fn finish_unquoted_value(&mut self, dangling: bool) {
        match self.last_stripped {
            Some((at, byte)) if at >= self.escaped_floor => {
                trim_trailing_space(&mut self.out, at);
                if self.out.len() == at {
                    // The stripped byte was trailing whitespace: keep it, escaped.
                    self.out.extend_from_slice(&[b'\\', byte]);
                }
            }
            _ => trim_trailing_space(&mut self.out, self.escaped_floor),
        }

        if self.separators == EmbeddedSeparators::TwoOrMore && !self.bare_quote && !dangling {
            let value = self.out.split_off(self.value_start);
            self.out.push(b'"');
            let mut i = 0;
            while i < value.len() {
                if value[i] == b'\\' {
                    if value[i + 1..].starts_with(b"00") {
                        self.out.extend_from_slice(br"\00");
                        i += 3;
                        continue;
                    }
                    if let Some(&next) = value.get(i + 1) {
                        // Inside quotes only `\` and `"` stay escaped.
                        if needs_escape(next) {
                            self.out.push(b'\\');
                        }
                        self.out.push(next);
                        i += 2;
                        continue;
                    }
                }
                self.out.push(value[i]);
                i += 1;
            }
            self.out.push(b'"');
            self.stats.values_quoted += 1;
        }
    }

    /// Called on the closing quote: keeps the quotes or rewrites to an unquoted value.
    fn finish_quoted_value(&mut self) {
        let inner = self.value_start + 1;
        let empty = self.out.len() == inner;
        let leading_space = self.out.get(inner).is_some_and(|b| is_space(*b));
        let trailing_space = !empty && self.out.last().is_some_and(|b| is_space(*b));

        match self.separators {
            EmbeddedSeparators::TwoOrMore => self.out.push(b'"'),
            // An empty unquoted value would read the next separator as data.
            _ if empty || leading_space || trailing_space => self.out.push(b'"'),
            EmbeddedSeparators::None => {
                self.out.remove(self.value_start);
                self.stats.values_unquoted += 1;
            }
            EmbeddedSeparators::One(at) => {
                // Shift the bytes before the separator over the opening quote and
                // escape the separator, which stays where it is.
                self.out.remove(self.value_start);
                self.out.insert(at - 1, b'\\');
                self.stats.values_unquoted += 1;
            }
        }
    }

    fn finish(mut self, escape: Escape) -> (Vec<u8>, ConvertStats, ScanOutcome) {
        let outcome = ScanOutcome::at_end(self.state, escape);
        let dangling = escape.is_pending();
        if self.state == State::InValue {
            self.finish_unquoted_value(dangling);
            self.trim_floor = self.out.len();
        }
        if ends_in_value(self.state) {
            self.stats.rdns += 1;
        }
        trim_trailing_space(&mut self.out, self.trim_floor);

        // An AVA cut short by the end of input is left after the sorted ones.
        let complete = match self.state {
            State::InValue => !dangling,
            State::BeforeSeparator => true,
            _ => false,
        };
        if complete {
            self.avas.push(self.ava_start..self.out.len());
        }
        self.sort_avas();
        (self.out, self.stats, outcome)
    }
}

/// Runs the compatibility scan, returning the output with its counters.
pub(crate) fn convert_with_stats(dn: &[u8]) -> (Vec<u8>, ConvertStats, ScanOutcome) {
    let mut converter = Converter::new(dn.len());
    let mut escape = Escape::default();
    // A folded `\xx` escape replaces the input byte at `i` with the decoded byte.
    let mut folded: Option<u8> = None;
    let mut i = 0;

    while i < dn.len() {
        let b = folded.take().unwrap_or(dn[i]);
        let escaped = escape.take();
        converter.step(b, escaped);

        if b == b'\\' && !escaped && converter.in_value() {
            if let (Some(&hi), Some(&lo)) = (dn.get(i + 1), dn.get(i + 2)) {
                match hex_pair(hi, lo) {
                    Some(0) => {
                        // `\00` is left untouched.
                        converter.step(hi, false);
                        converter.step(lo, false);
                        i += 3;
                        continue;
                    }
                    Some(byte) => {
                        converter.stats.hex_escapes_folded += 1;
                        escape = Escape::Pending;
                        folded = Some(byte);
                        i += 2;
                        continue;
                    }
                    None => {}
                }
            }
        }
        escape.arm_after(b, escaped);
        i += 1;
    }

    converter.finish(escape)
}

/// Canonicalizes `dn` with the compatibility rules.
///
/// Total over arbitrary bytes; the output is never longer than the input.
/// Hex folding can produce bytes that are not valid UTF-8.
pub fn normalize_convert(dn: impl AsRef<[u8]>) -> Vec<u8> {
    convert_with_stats(dn.as_ref()).0
}

/// Replaces the contents of `dn` with its compatibility canonical form, reusing the allocation.
pub fn normalize_convert_in_place(dn: &mut Vec<u8>) {
    let canonical = normalize_convert(dn.as_slice());
    dn.clear();
    dn.extend_from_slice(&canonical);
}
