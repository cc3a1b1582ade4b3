/// The type of the XML node.
///
/// Access it using [`Value::value_type`] or
/// [`Ldml::value_type`](crate::ldmldata::Ldml::value_type).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document root that holds everything. Note that this is not the same
    /// as the document element.
    Root,
    /// Element; it has a tag and attributes.
    Element,
    /// Text. You can get and set the text value.
    Text,
    /// Comment.
    Comment,
}

/// An XML value.
///
/// Access it using [`Ldml::value`](crate::ldmldata::Ldml::value) or mutably
/// using [`Ldml::value_mut`](crate::ldmldata::Ldml::value_mut).
#[derive(Debug, Clone)]
pub enum Value {
    /// Document root that holds everything. Note that this is not the same
    /// as the document element.
    Root,
    /// Element; it has a tag and attributes.
    Element(Element),
    /// Text. You can get and set the text value.
    Text(Text),
    /// Comment.
    Comment(Comment),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Root => ValueType::Root,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
        }
    }
}

/// An insertion-ordered map of attribute names to string values.
///
/// Attribute order is preserved so that serializing a document does not
/// shuffle its attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes {
            entries: Vec::new(),
        }
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute value. An existing attribute keeps its position.
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        for entry in self.entries.iter_mut() {
            if entry.0 == name {
                entry.1 = value;
                return;
            }
        }
        self.entries.push((name, value));
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterate over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// XML element value.
///
/// Example: `<collation/>` or `<script type="Latn"/>`.
///
/// The tag is the full prefixed name (`sil:font`); namespace declarations
/// are ordinary attributes (`xmlns:sil`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attributes: Attributes,
}

impl Element {
    pub(crate) fn new<S: Into<String>>(tag: S) -> Self {
        Element {
            tag: tag.into(),
            attributes: Attributes::new(),
        }
    }

    /// The tag of the element.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// let root = ldml.parse("<ldml/>")?;
    /// let doc_el = ldml.document_element(root)?;
    /// assert_eq!(ldml.element(doc_el).unwrap().tag(), "ldml");
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The attributes of the element.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// let root = ldml.parse(r#"<ldml><language type="zzz"/></ldml>"#)?;
    /// let language = ldml.find_element(None, "language").unwrap();
    /// let element = ldml.element(language).unwrap();
    /// assert_eq!(element.get_attribute("type"), Some("zzz"));
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Set an attribute value.
    pub fn set_attribute<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.attributes.insert(name, value);
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Whether this element carries an `alt` attribute, marking it as an
    /// alternate variant of a sibling.
    pub fn is_alternate(&self) -> bool {
        self.attributes.contains("alt")
    }
}

/// XML text value.
///
/// Example: `Latn` in `<script>Latn</script>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }
}

/// XML comment.
///
/// Example: `<!-- foo -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the comment text.
    ///
    /// Rejects comments that contain `--` as illegal.
    pub fn set<S: Into<String>>(&mut self, text: S) -> Result<(), crate::error::Error> {
        let text = text.into();
        if text.contains("--") {
            return Err(crate::error::Error::InvalidComment(text));
        }
        self.text = text;
        Ok(())
    }
}
