//! Hex digit decoding for `\xx` escapes.

/// Decodes one ASCII hex digit (`0-9`, `a-f`, `A-F`) to its value.
///
/// Returns `None` for any other byte.
pub const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decodes a two-digit hex pair (`hi` then `lo`) to a byte.
pub const fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    match (hex_value(hi), hex_value(lo)) {
        (Some(hi), Some(lo)) => Some((hi << 4) | lo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_hex_digit() {
        for (i, c) in b"0123456789abcdef".iter().enumerate() {
            assert_eq!(hex_value(*c), Some(i as u8));
        }
        for (i, c) in b"ABCDEF".iter().enumerate() {
            assert_eq!(hex_value(*c), Some(10 + i as u8));
        }
    }

    #[test]
    fn rejects_non_hex_bytes() {
        for c in [b'g', b'G', b'x', b' ', b'\\', b'"', 0x00, 0x7f, 0xff] {
            assert_eq!(hex_value(c), None, "byte {c:#04x}");
        }
    }

    #[test]
    fn pairs_combine_high_and_low_nibbles() {
        assert_eq!(hex_pair(b'2', b'0'), Some(b' '));
        assert_eq!(hex_pair(b'2', b'c'), Some(b','));
        assert_eq!(hex_pair(b'5', b'C'), Some(b'\\'));
        assert_eq!(hex_pair(b'f', b'F'), Some(0xff));
        assert_eq!(hex_pair(b'0', b'0'), Some(0));
        assert_eq!(hex_pair(b'2', b'x'), None);
        assert_eq!(hex_pair(b'z', b'0'), None);
    }
}
