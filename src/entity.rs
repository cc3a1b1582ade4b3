use std::borrow::Cow;

use crate::error::Error;

/// Resolve predefined entities and numeric character references in text or
/// attribute content. LDML files use `&#x…;` references for exemplar
/// characters, so those are handled alongside the five predefined entities.
pub(crate) fn parse_entities(content: Cow<str>) -> Result<Cow<str>, Error> {
    let mut result = String::new();
    let mut chars = content.chars();
    let mut entity_seen = false;
    while let Some(c) = chars.next() {
        if c == '&' {
            let mut entity = String::new();
            let mut is_complete = false;
            for c in chars.by_ref() {
                if c == ';' {
                    is_complete = true;
                    break;
                }
                entity.push(c);
            }
            if !is_complete {
                return Err(Error::UnclosedEntity(entity));
            }
            entity_seen = true;
            match entity.as_str() {
                "amp" => result.push('&'),
                "apos" => result.push('\''),
                "gt" => result.push('>'),
                "lt" => result.push('<'),
                "quot" => result.push('"'),
                _ => result.push(parse_character_reference(&entity)?),
            }
        } else {
            result.push(c);
        }
    }

    if !entity_seen {
        Ok(content)
    } else {
        Ok(result.into())
    }
}

fn parse_character_reference(entity: &str) -> Result<char, Error> {
    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(hex) = entity.strip_prefix("#X") {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok()
    } else {
        None
    };
    code.and_then(char::from_u32)
        .ok_or_else(|| Error::InvalidEntity(entity.to_string()))
}

/// Escape text content for serialization.
pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        content
    } else {
        result.into()
    }
}

/// Escape attribute content for serialization. Attribute values are
/// double-quoted, so quotes are escaped too.
pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        content
    } else {
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let text = "A &amp; B";
        assert_eq!(parse_entities(text.into()).unwrap(), "A & B");
    }

    #[test]
    fn test_parse_multiple() {
        let text = "&amp;&apos;&gt;&lt;&quot;";
        assert_eq!(parse_entities(text.into()).unwrap(), "&'><\"");
    }

    #[test]
    fn test_parse_character_references() {
        let text = "[a &#x00E9; &#233;]";
        assert_eq!(parse_entities(text.into()).unwrap(), "[a \u{e9} \u{e9}]");
    }

    #[test]
    fn test_parse_unknown_entity() {
        let text = "&unknown;";
        let err = parse_entities(text.into());
        if let Err(Error::InvalidEntity(entity)) = err {
            assert_eq!(entity, "unknown");
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_parse_surrogate_reference() {
        let text = "&#xD800;";
        assert!(matches!(
            parse_entities(text.into()),
            Err(Error::InvalidEntity(_))
        ));
    }

    #[test]
    fn test_parse_unfinished_entity() {
        let text = "&amp";
        let err = parse_entities(text.into());
        if let Err(Error::UnclosedEntity(entity)) = err {
            assert_eq!(entity, "amp");
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_parse_no_entities() {
        let text = "hello";
        let result = parse_entities(text.into()).unwrap();
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }

    #[test]
    fn test_serialize_text() {
        let text = "A & B < C";
        assert_eq!(serialize_text(text.into()), "A &amp; B &lt; C");
    }

    #[test]
    fn test_serialize_text_keeps_quotes() {
        let text = "a \"b\"";
        assert_eq!(serialize_text(text.into()), "a \"b\"");
    }

    #[test]
    fn test_serialize_attribute() {
        let text = "a \"b\" & c";
        assert_eq!(serialize_attribute(text.into()), "a &quot;b&quot; &amp; c");
    }

    #[test]
    fn test_serialize_no_entities() {
        let text = "hello";
        let result = serialize_text(text.into());
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }
}
