//! Compare command implementation.

use ldapdn_canonical::Canonicalizer;

pub fn run(
    canonicalizer: Canonicalizer,
    a: String,
    b: String,
) -> Result<(), Box<dyn std::error::Error>> {
    if canonicalizer.same_entry(&a, &b) {
        println!("same");
        return Ok(());
    }

    println!("different");
    std::process::exit(1);
}
