use crate::error::Error;
use crate::ldmldata::{Ldml, Node};
use crate::value::{Element, Text, Value, ValueType};

/// ## Read-only access
impl Ldml {
    /// Access the XML value of a node.
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    /// Access the XML value of a node mutably.
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena_mut()[node.get()].get_mut()
    }

    /// Returns the type of the node's value.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// The element of a node, or `None` if the node is not an element.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The element of a node mutably.
    pub fn element_mut(&mut self, node: Node) -> Option<&mut Element> {
        match self.value_mut(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The text of a node, or `None` if the node is not text.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The text of a node mutably.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        match self.value_mut(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The tag of an element node.
    pub fn tag(&self, node: Node) -> Option<&str> {
        self.element(node).map(|element| element.tag())
    }

    /// Get an attribute value of an element node.
    pub fn attribute(&self, node: Node, name: &str) -> Option<&str> {
        self.element(node)?.get_attribute(name)
    }

    /// Get parent node.
    ///
    /// Returns [`None`] if this is the document root or the node is
    /// unattached.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Iterate over the child nodes of a node.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterate over the element children of a node.
    pub fn child_elements(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.children(node)
            .filter(|&child| matches!(self.value(child), Value::Element(_)))
    }

    /// Iterate over a node and all its descendants in document order.
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if there is no next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Obtain the document element from the document root.
    ///
    /// Returns [`Error::NotRoot`] if the node is not a document root, and
    /// [`Error::NoDocumentElement`] if the root has no element child.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// let root = ldml.parse("<ldml><identity/></ldml>")?;
    /// let doc_el = ldml.document_element(root)?;
    /// assert_eq!(ldml.tag(doc_el), Some("ldml"));
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn document_element(&self, node: Node) -> Result<Node, Error> {
        if self.value_type(node) != ValueType::Root {
            return Err(Error::NotRoot(node));
        }
        self.child_elements(node)
            .next()
            .ok_or(Error::NoDocumentElement)
    }

    /// First child element of `base` with the given tag.
    pub fn child_by_tag(&self, base: Node, tag: &str) -> Option<Node> {
        self.children(base).find(|&child| {
            self.element(child)
                .map_or(false, |element| element.tag() == tag)
        })
    }

    /// The text content of an element with a single text child.
    ///
    /// Returns `Some("")` for an empty element and [`None`] for an element
    /// with element or mixed content.
    pub fn text_content_str(&self, node: Node) -> Option<&str> {
        let mut children = self.children(node);
        let first = match children.next() {
            None => return Some(""),
            Some(first) => first,
        };
        if children.next().is_some() {
            return None;
        }
        self.text(first).map(|text| text.get())
    }
}

/// ## Document lookup
///
/// These operate relative to the document element when no base node is
/// given, creating the document lazily if none has been loaded.
impl Ldml {
    fn base_or_root(&mut self, base: Option<Node>) -> Node {
        match base {
            Some(node) => node,
            None => self.root(),
        }
    }

    /// Find the first child element of `base` with the given tag.
    ///
    /// When `base` is `None` the document element is used, created if
    /// absent.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// ldml.parse("<ldml><identity/><collations/></ldml>")?;
    /// assert!(ldml.find_element(None, "collations").is_some());
    /// assert!(ldml.find_element(None, "delimiters").is_none());
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn find_element(&mut self, base: Option<Node>, tag: &str) -> Option<Node> {
        let base = self.base_or_root(base);
        self.child_by_tag(base, tag)
    }

    /// Descend through a tag path, one [`Ldml::find_element`] step per tag.
    ///
    /// Returns `None` as soon as any step fails.
    pub fn find_elements(&mut self, base: Option<Node>, tags: &[&str]) -> Option<Node> {
        let mut current = self.base_or_root(base);
        for tag in tags {
            current = self.child_by_tag(current, tag)?;
        }
        Some(current)
    }

    /// Like [`Ldml::find_element`], but skips children carrying an `alt`
    /// attribute.
    pub fn find_ldml_element(&mut self, base: Option<Node>, tag: &str) -> Option<Node> {
        let base = self.base_or_root(base);
        self.children(base).find(|&child| {
            self.element(child)
                .map_or(false, |element| element.tag() == tag && !element.is_alternate())
        })
    }

    /// Filter out nodes whose element carries an `alt` attribute.
    ///
    /// Non-element nodes pass through unchanged.
    pub fn non_alt<'a, I>(&'a self, nodes: I) -> impl Iterator<Item = Node> + 'a
    where
        I: IntoIterator<Item = Node>,
        I::IntoIter: 'a,
    {
        nodes.into_iter().filter(move |&node| {
            self.element(node)
                .map_or(true, |element| !element.is_alternate())
        })
    }

    /// Iterate over the children of a node, skipping `alt` variants.
    pub fn children_non_alt(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.non_alt(self.children(node))
    }
}
