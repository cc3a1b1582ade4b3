use ldmldoc::{Error, Ldml, Value};

#[test]
fn test_parse_basic() {
    let mut ldml = Ldml::new();
    let root = ldml.parse(r#"<ldml><identity/></ldml>"#).unwrap();
    let doc_el = ldml.document_element(root).unwrap();
    assert_eq!(ldml.tag(doc_el), Some("ldml"));
    assert_eq!(ldml.document(), Some(root));
}

#[test]
fn test_parse_attributes_in_order() {
    let mut ldml = Ldml::new();
    ldml.parse(r#"<ldml><collation type="standard" alt="proposed"/></ldml>"#)
        .unwrap();
    let root = ldml.root();
    let collation = ldml.child_by_tag(root, "collation").unwrap();
    let names: Vec<_> = ldml
        .element(collation)
        .unwrap()
        .attributes()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(names, ["type", "alt"]);
}

#[test]
fn test_parse_prefixed_tags_and_namespace_attribute() {
    let mut ldml = Ldml::new();
    ldml.parse(r#"<ldml xmlns:sil="urn://www.sil.org/ldml/0.1"><special><sil:identity/></special></ldml>"#)
        .unwrap();
    let root = ldml.root();
    assert_eq!(
        ldml.attribute(root, "xmlns:sil"),
        Some("urn://www.sil.org/ldml/0.1")
    );
    assert!(ldml
        .find_elements(None, &["special", "sil:identity"])
        .is_some());
}

#[test]
fn test_parse_text_entities() {
    let mut ldml = Ldml::new();
    ldml.parse(r#"<ldml><a>x &amp; y</a></ldml>"#).unwrap();
    let a = ldml.find_element(None, "a").unwrap();
    assert_eq!(ldml.text_content_str(a), Some("x & y"));
}

#[test]
fn test_parse_attribute_entities() {
    let mut ldml = Ldml::new();
    ldml.parse(r#"<ldml><a open="&#x00AB;"/></ldml>"#).unwrap();
    let a = ldml.find_element(None, "a").unwrap();
    assert_eq!(ldml.attribute(a, "open"), Some("\u{ab}"));
}

#[test]
fn test_parse_comment_preserved() {
    let mut ldml = Ldml::new();
    let root = ldml.parse("<!-- locale data --><ldml/>").unwrap();
    let first = ldml.first_child(root).unwrap();
    if let Value::Comment(comment) = ldml.value(first) {
        assert_eq!(comment.get(), " locale data ");
    } else {
        unreachable!();
    }
}

#[test]
fn test_parse_cdata_merges_with_text() {
    let mut ldml = Ldml::new();
    ldml.parse("<ldml><cr>a<![CDATA[ < ]]>b</cr></ldml>").unwrap();
    let cr = ldml.find_element(None, "cr").unwrap();
    assert_eq!(ldml.text_content_str(cr), Some("a < b"));
}

#[test]
fn test_parse_whitespace_preserved() {
    let mut ldml = Ldml::new();
    let root = ldml.parse("<ldml>\n  <identity/>\n</ldml>").unwrap();
    assert_eq!(ldml.to_string(root).unwrap(), "<ldml>\n  <identity/>\n</ldml>");
}

#[test]
fn test_parse_declaration_skipped() {
    let mut ldml = Ldml::new();
    let root = ldml
        .parse("<?xml version=\"1.0\" encoding=\"utf-8\"?><ldml/>")
        .unwrap();
    assert_eq!(ldml.to_string(root).unwrap(), "<ldml/>");
}

#[test]
fn test_parse_mismatched_close() {
    let mut ldml = Ldml::new();
    let err = ldml.parse("<ldml><identity></ldml></ldml>");
    assert!(matches!(err, Err(Error::UnexpectedClose(tag)) if tag == "ldml"));
}

#[test]
fn test_parse_unclosed_element() {
    let mut ldml = Ldml::new();
    let err = ldml.parse("<ldml><identity>");
    assert!(matches!(err, Err(Error::UnclosedElement(tag)) if tag == "identity"));
}

#[test]
fn test_parse_malformed() {
    let mut ldml = Ldml::new();
    assert!(matches!(
        ldml.parse("<ldml <identity/>"),
        Err(Error::Parser(_))
    ));
}

#[test]
fn test_parse_replaces_document_handle() {
    let mut ldml = Ldml::new();
    let first = ldml.parse("<ldml><identity/></ldml>").unwrap();
    let second = ldml.parse("<ldml><collations/></ldml>").unwrap();
    assert_ne!(first, second);
    assert_eq!(ldml.document(), Some(second));
    assert!(ldml.find_element(None, "collations").is_some());
    assert!(ldml.find_element(None, "identity").is_none());
}
