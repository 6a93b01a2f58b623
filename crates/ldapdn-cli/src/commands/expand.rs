//! Expand command implementation.

use crate::input::Source;
use crate::output;

pub fn run(source: Source) -> Result<(), Box<dyn std::error::Error>> {
    for dn in source.read()? {
        output::print_dn(&ldapdn_canonical::expand(&dn))?;
    }
    Ok(())
}
