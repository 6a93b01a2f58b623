use ldapdn_canonical::{expand, Canonicalizer, Profile};

fn main() {
    let canonicalizer = Canonicalizer::new(Profile::Compat);
    let dns = [
        r#"cn="Smith, Bob" ; ou=People, o=Example"#,
        r"cn=Bob\20Smith,ou=People,o=Example",
        "cn = Bob + sn = Smith , o = Example",
    ];

    for dn in dns {
        let result = canonicalizer.canonicalize_with_report(dn);
        println!("{dn}");
        println!("  canonical: {}", result.dn);
        println!("  display:   {}", String::from_utf8_lossy(&expand(result.dn.as_bytes())));
        println!("  identity:  {}", result.dn.identity());
        println!("  status:    {:?}", result.report.status);
    }
}
