//! Digest command implementation.

use crate::input::Source;
use crate::output;
use ldapdn_canonical::Canonicalizer;
use serde_json::json;

pub fn run(
    canonicalizer: Canonicalizer,
    source: Source,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for dn in source.read()? {
        let identity = canonicalizer.identity(&dn);
        if json {
            output::print_json(&json!({
                "input": output::lossy(&dn),
                "identity": identity,
            }))?;
        } else {
            println!("{}", identity);
        }
    }
    Ok(())
}
