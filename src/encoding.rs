use encoding_rs::Encoding;
use xhtmlchardet::detect;

/// Detect the character encoding of raw document bytes, falling back to
/// UTF-8 when detection comes up empty.
pub(crate) fn detect_encoding(data: &[u8], hint: Option<String>) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, hint).ok()?;
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        charsets[0].as_str()
    };
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        let data = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><ldml/>";
        let enc = detect_encoding(data, None).unwrap();
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn test_utf8_without_declaration() {
        let data = b"<ldml/>";
        let enc = detect_encoding(data, None).unwrap();
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn test_iso8859_1() {
        let data = b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><ldml/>";
        let enc = detect_encoding(data, None).unwrap();
        // windows-1252 is a superset of 8859-1
        assert_eq!(enc.name(), "windows-1252");
    }

    #[test]
    fn test_decode_latin1() {
        let data = b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><ldml>caf\xe9</ldml>";
        let enc = detect_encoding(data, None).unwrap();
        let (text, _, had_errors) = enc.decode(data);
        assert!(!had_errors);
        assert!(text.contains("caf\u{e9}"));
    }
}
