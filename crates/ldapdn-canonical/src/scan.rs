//! Lexical classes and parser states shared by the DN scanners.

/// Whitespace that is insignificant around types, `=` and separators.
pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r')
}

/// RDN (`,` `;`) and multi-valued RDN (`+`) separators.
pub(crate) const fn is_separator(b: u8) -> bool {
    matches!(b, b',' | b';' | b'+')
}

/// Bytes that must stay backslash-escaped inside a value.
pub(crate) const fn needs_escape(b: u8) -> bool {
    matches!(b, b'\\' | b'"')
}

/// Canonical spelling of a separator: `+` joins AVAs, everything else ends the RDN.
pub(crate) const fn canonical_separator(b: u8) -> u8 {
    if b == b'+' {
        b'+'
    } else {
        b','
    }
}

/// Position of the scanner within one AVA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    BeforeType,
    InType,
    BeforeEqual,
    BeforeValue,
    InValue,
    InQuotedValue,
    /// After a closing quote; everything up to the next separator is dropped.
    BeforeSeparator,
}

/// One-step escape marker set by an unescaped backslash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Escape {
    #[default]
    Inactive,
    Pending,
}

impl Escape {
    /// Consumes the marker; returns whether the byte about to be processed is escaped.
    pub(crate) fn take(&mut self) -> bool {
        matches!(std::mem::take(self), Escape::Pending)
    }

    /// Arms the marker after `byte` if it is a backslash that was not itself escaped.
    pub(crate) fn arm_after(&mut self, byte: u8, escaped: bool) {
        if byte == b'\\' && !escaped {
            *self = Escape::Pending;
        }
    }

    pub(crate) fn is_pending(self) -> bool {
        self == Escape::Pending
    }
}

/// Malformations noticed when a scan reaches the end of the DN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScanOutcome {
    pub unterminated_quote: bool,
    pub dangling_escape: bool,
    pub missing_equals: bool,
}

impl ScanOutcome {
    pub(crate) fn at_end(state: State, escape: Escape) -> Self {
        Self {
            unterminated_quote: state == State::InQuotedValue,
            dangling_escape: escape.is_pending(),
            missing_equals: matches!(state, State::InType | State::BeforeEqual),
        }
    }
}

/// True in the states where the last RDN holds a value.
pub(crate) fn ends_in_value(state: State) -> bool {
    matches!(
        state,
        State::InValue | State::InQuotedValue | State::BeforeSeparator
    )
}

/// Drops trailing whitespace from `out`, never shrinking it below `floor`.
pub(crate) fn trim_trailing_space(out: &mut Vec<u8>, floor: usize) {
    while out.len() > floor && out.last().is_some_and(|b| is_space(*b)) {
        out.pop();
    }
}
