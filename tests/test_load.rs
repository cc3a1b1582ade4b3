use std::io::Write;
use std::path::PathBuf;

use ldmldoc::{Error, Ldml};

fn temp_file(name: &str, data: &[u8]) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("ldmldoc-{}-{}", std::process::id(), name));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(data).unwrap();
    path
}

#[test]
fn test_load_from_file() {
    let path = temp_file(
        "basic.xml",
        b"<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<ldml><identity><language type=\"mql\"/></identity></ldml>",
    );
    let mut ldml = Ldml::new();
    let root = ldml.load_from_file(&path).unwrap();
    assert_eq!(ldml.document(), Some(root));
    let language = ldml.find_elements(None, &["identity", "language"]).unwrap();
    assert_eq!(ldml.attribute(language, "type"), Some("mql"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_load_from_file_latin1() {
    let path = temp_file(
        "latin1.xml",
        b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><ldml><a>caf\xe9</a></ldml>",
    );
    let mut ldml = Ldml::new();
    ldml.load_from_file(&path).unwrap();
    let a = ldml.find_element(None, "a").unwrap();
    assert_eq!(ldml.text_content_str(a), Some("caf\u{e9}"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_load_from_file_missing() {
    let mut ldml = Ldml::new();
    let mut path = std::env::temp_dir();
    path.push("ldmldoc-does-not-exist.xml");
    assert!(matches!(ldml.load_from_file(&path), Err(Error::Io(_))));
}

#[test]
fn test_load_replaces_document() {
    let first = temp_file("first.xml", b"<ldml><identity/></ldml>");
    let second = temp_file("second.xml", b"<ldml><collations/></ldml>");
    let mut ldml = Ldml::new();
    ldml.load_from_file(&first).unwrap();
    assert!(ldml.find_element(None, "identity").is_some());
    ldml.load_from_file(&second).unwrap();
    assert!(ldml.find_element(None, "identity").is_none());
    assert!(ldml.find_element(None, "collations").is_some());
    std::fs::remove_file(first).unwrap();
    std::fs::remove_file(second).unwrap();
}

#[test]
fn test_load_from_url_invalid() {
    let mut ldml = Ldml::new();
    ldml.parse("<ldml><identity/></ldml>").unwrap();
    // not a URL at all; fails without touching the network
    assert!(matches!(
        ldml.load_from_url("not a url"),
        Err(Error::Http(_))
    ));
    // a failed load leaves the current document in place
    assert!(ldml.find_element(None, "identity").is_some());
}
