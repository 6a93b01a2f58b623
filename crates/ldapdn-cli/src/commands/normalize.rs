//! Normalize command implementation.

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
        let result = canonicalizer.canonicalize_with_report(&dn);
        if json {
            let value = json!({
                "input": output::lossy(&dn),
                "canonical": result.dn,
                "identity": result.dn.identity(),
                "report": result.report,
            });
            output::print_json(&value)?;
        } else {
            output::print_dn(result.dn.as_bytes())?;
        }
    }
    Ok(())
}
