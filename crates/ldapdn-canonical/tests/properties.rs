use ldapdn_canonical::{
    expand, hex_value, normalize, normalize_convert, uses_legacy_quoting, Canonicalizer, Profile,
};
use proptest::prelude::*;
use proptest::sample::select;

/// Bytes weighted towards the ones the scanners treat specially.
fn dn_byte() -> impl Strategy<Value = u8> {
    prop_oneof![
        3 => select(b"\\\",;+= \n\r#".to_vec()),
        2 => select(b"0123456789abcdefABCDEF".to_vec()),
        2 => any::<u8>(),
    ]
}

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,6}"
}

fn join_words(first: String, rest: Vec<(&'static str, String)>) -> String {
    let mut value = first;
    for (sep, word) in rest {
        value.push_str(sep);
        value.push_str(&word);
    }
    value
}

fn unquoted_value() -> impl Strategy<Value = String> {
    let lead = select(vec!["", "", r"\ ", r"\20", r"\#", r"\23"]);
    let inner = select(vec![" ", r"\,", r"\, ", r"\;", r"\+", r"\20", r"\00", "\"", r"\0A"]);
    (lead, word(), prop::collection::vec((inner, word()), 0..4))
        .prop_map(|(lead, first, rest)| format!("{lead}{}", join_words(first, rest)))
}

fn quoted_value() -> impl Strategy<Value = String> {
    let inner = select(vec![" ", ", ", ";", "+", r#"\""#, r"\\"]);
    (word(), prop::collection::vec((inner, word()), 0..4))
        .prop_map(|(first, rest)| format!("\"{}\"", join_words(first, rest)))
}

fn ava() -> impl Strategy<Value = String> {
    (
        "[a-z]{1,8}",
        select(vec!["=", " = ", "= ", " ="]),
        prop_oneof![unquoted_value(), quoted_value()],
    )
        .prop_map(|(attr, eq, value)| format!("{attr}{eq}{value}"))
}

fn rdn() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(ava(), 1..3),
        select(vec!["+", " + ", "+ "]),
    )
        .prop_map(|(avas, join)| avas.join(join))
}

fn dn() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(rdn(), 1..4)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn arbitrary_bytes_never_grow_or_panic(input in prop::collection::vec(dn_byte(), 0..96)) {
        prop_assert!(normalize(&input).len() <= input.len());
        prop_assert!(normalize_convert(&input).len() <= input.len());
        prop_assert!(expand(&input).len() <= input.len() * 2);
        let _ = uses_legacy_quoting(&input);
        for profile in [Profile::Legacy, Profile::Compat] {
            let canonicalizer = Canonicalizer::new(profile);
            let result = canonicalizer.canonicalize_with_report(&input);
            prop_assert!(result.dn.len() <= input.len());
            let again = canonicalizer.canonicalize(result.dn.as_bytes());
            prop_assert_eq!(again, result.dn);
        }
    }

    #[test]
    fn legacy_is_idempotent(rdns in dn()) {
        let input = rdns.join(" , ");
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn compat_is_idempotent(rdns in dn()) {
        let input = rdns.join(";");
        let once = normalize_convert(&input);
        prop_assert_eq!(normalize_convert(&once), once);
    }

    #[test]
    fn separator_spelling_does_not_matter(rdns in dn()) {
        let commas = rdns.join(",");
        let semicolons = rdns.join("; ");
        prop_assert_eq!(normalize(&commas), normalize(&semicolons));
        prop_assert_eq!(normalize_convert(&commas), normalize_convert(&semicolons));
    }

    #[test]
    fn ava_order_does_not_matter_in_compat(avas in prop::collection::vec(ava(), 2..4)) {
        let forward = avas.join("+");
        let backward = avas.iter().rev().cloned().collect::<Vec<_>>().join("+");
        prop_assert_eq!(normalize_convert(&forward), normalize_convert(&backward));
    }

    #[test]
    fn expansion_canonicalizes_back(rdns in dn()) {
        let input = rdns.join(",");
        let shown = expand(&input);
        prop_assert_eq!(normalize(&shown), normalize(&input));
        prop_assert_eq!(normalize_convert(&shown), normalize_convert(&input));
    }

    #[test]
    fn hex_value_agrees_with_char_digits(c in any::<u8>()) {
        let expected = (c as char).to_digit(16).map(|d| d as u8);
        prop_assert_eq!(hex_value(c), expected);
    }
}
