use ldmldoc::{escape, unescape, Collation};
use rstest::rstest;

#[rstest]
#[case("abc", "abc")]
#[case("a&b", "a\\&b")]
#[case("a<b", "a\\<b")]
#[case("[]", "\\[\\]")]
#[case("a/A", "a\\/A")]
#[case("\u{00E9}", "\\u00E9")]
#[case(" ", "\\u0020")]
#[case("\u{1F600}", "\\U0001F600")]
fn test_escape(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(escape(input), expected);
}

#[rstest]
#[case("abc", "abc")]
#[case("\\&", "&")]
#[case("\\u00E9", "\u{00E9}")]
#[case("\\U0001F600", "\u{1F600}")]
#[case("a\\u0062c", "abc")]
fn test_unescape(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(unescape(input), expected);
}

#[test]
fn test_escape_unescape_round_trip() {
    let text = "a&b \u{00E9}\u{1F600}/";
    assert_eq!(unescape(&escape(text)), text);
}

#[test]
fn test_unescape_invalid_escape_kept() {
    // not enough hex digits; the marker survives without its backslash
    assert_eq!(unescape("\\uZZ"), "uZZ");
}

#[test]
fn test_parse_levels() {
    let coll = Collation::parse("&a < b << c <<< d = e");
    assert_eq!(coll.len(), 4);
    assert_eq!(coll.get("b").unwrap().base(), "a");
    assert_eq!(coll.get("b").unwrap().level(), 1);
    assert_eq!(coll.get("c").unwrap().level(), 2);
    assert_eq!(coll.get("d").unwrap().level(), 3);
    assert_eq!(coll.get("e").unwrap().level(), 4);
    assert_eq!(coll.get("e").unwrap().base(), "d");
}

#[test]
fn test_parse_multiple_runs() {
    let coll = Collation::parse("&a < b\n&x << y");
    assert_eq!(coll.get("b").unwrap().base(), "a");
    assert_eq!(coll.get("y").unwrap().base(), "x");
    assert_eq!(coll.get("y").unwrap().level(), 2);
}

#[test]
fn test_parse_escaped_keys() {
    let coll = Collation::parse("&\\u00E9 < f");
    assert_eq!(coll.get("f").unwrap().base(), "\u{00E9}");
}

#[test]
fn test_as_icu_round_trip() {
    let tailoring = "&a < b <<< B << c";
    assert_eq!(Collation::parse(tailoring).as_icu(), tailoring);
}

#[test]
fn test_as_icu_breaks_chain_on_new_base() {
    let coll = Collation::parse("&a < b\n&x << y");
    assert_eq!(coll.as_icu(), "&a < b\n&x << y");
}

#[test]
fn test_as_icu_empty() {
    assert_eq!(Collation::new().as_icu(), "");
    assert!(Collation::new().is_empty());
}

#[test]
fn test_from_sort_lines_case_pairs() {
    // two case-equivalent items on a line are the case pair Paratext
    // would not let the user write with a slash
    let coll = Collation::from_sort_lines(&["a A", "b B"]);
    assert_eq!(coll.as_icu(), "&a <<< A\n&b <<< B");
}

#[test]
fn test_from_sort_lines_secondary_items() {
    let coll = Collation::from_sort_lines(&["e \u{00E9} \u{00E8}"]);
    assert_eq!(coll.as_icu(), "&e << \\u00E9 << \\u00E8");
}

#[test]
fn test_from_sort_lines_slash_pairs() {
    let coll = Collation::from_sort_lines(&["ng/Ng ngh/Ngh"]);
    assert_eq!(coll.get("Ng").unwrap().level(), 3);
    assert_eq!(coll.get("ngh").unwrap().level(), 2);
    assert_eq!(coll.get("ngh").unwrap().base(), "Ng");
    assert_eq!(coll.get("Ngh").unwrap().level(), 3);
}

#[test]
fn test_from_sort_lines_single_item_line() {
    // a lone item only anchors; there is nothing to tailor
    let coll = Collation::from_sort_lines(&["a"]);
    assert!(coll.is_empty());
}
