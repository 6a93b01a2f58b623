//! Check command implementation.

use crate::input::Source;
use crate::output;
use ldapdn_canonical::{Canonicalizer, Profile, QuotingStyle};
use serde_json::json;

pub fn run(source: Source, strict: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Canonicalizer::new(Profile::Compat);
    let mut legacy_found = false;

    for dn in source.read()? {
        let style = QuotingStyle::detect(&dn);
        if style == QuotingStyle::Legacy {
            legacy_found = true;
            eprintln!(
                "Warning: {} uses deprecated LDAPv2 quoting; LDAPv3 form is {}",
                output::lossy(&dn),
                converter.canonicalize(&dn)
            );
        }

        if json {
            output::print_json(&json!({
                "input": output::lossy(&dn),
                "style": style,
            }))?;
        } else {
            println!("{}", style);
        }
    }

    if strict && legacy_found {
        std::process::exit(1);
    }

    Ok(())
}
