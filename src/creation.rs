use crate::error::Error;
use crate::ldmldata::{Ldml, Node};
use crate::value::{Comment, Element, Text, Value};

/// ## Creation
impl Ldml {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(value))
    }

    /// Create a new, unattached element node with the given tag.
    pub fn new_element(&mut self, tag: &str) -> Node {
        self.new_node(Value::Element(Element::new(tag)))
    }

    /// Create a new, unattached text node.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(text.to_string())))
    }

    /// Create a new, unattached comment node.
    pub fn new_comment(&mut self, comment: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(comment.to_string())))
    }

    /// Create a minimal LDML document for a language and script.
    ///
    /// The document carries an `identity` element with `language` and
    /// `script` children, the shape entry tools start new locales from.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::minimal("zzz", "Latn")?;
    /// let script = ldml.find_elements(None, &["identity", "script"]).unwrap();
    /// assert_eq!(ldml.attribute(script, "type"), Some("Latn"));
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn minimal(language: &str, script: &str) -> Result<Self, Error> {
        let mut ldml = Ldml::new();
        let root = ldml.root();
        let identity = ldml.append_element(root, "identity")?;
        let language_el = ldml.append_element(identity, "language")?;
        ldml.set_attribute(language_el, "type", language)?;
        let script_el = ldml.append_element(identity, "script")?;
        ldml.set_attribute(script_el, "type", script)?;
        let comment = ldml.new_comment(
            " Please enter language data in the fields below. All data should be entered in English ",
        );
        let document = ldml.document_root();
        ldml.prepend(document, comment)?;
        Ok(ldml)
    }
}
