//! Output formatting utilities.

use serde_json::Value;
use std::borrow::Cow;
use std::io::{self, Write};

/// Writes a DN to stdout as raw bytes; folded escapes may not be UTF-8.
pub fn print_dn(dn: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(dn)?;
    stdout.write_all(b"\n")
}

/// Prints `value` as one line of canonical JSON (sorted keys, no whitespace).
pub fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let line = canonical_json::to_string(value)
        .map_err(|e| format!("Failed to encode JSON: {}", e))?;
    println!("{}", line);
    Ok(())
}

/// Input DN as text for JSON and messages.
pub fn lossy(dn: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(dn)
}
