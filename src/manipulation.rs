use crate::error::Error;
use crate::ldmldata::{Ldml, Node};
use crate::value::ValueType;

/// ## Manipulation
///
/// This maintains an XML structure:
/// - Only elements and the document root can have children.
/// - The document root cannot be moved or removed.
impl Ldml {
    /// Append a child to the end of the children of the given parent.
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Prepend a child to the beginning of the children of the given parent.
    pub fn prepend(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(parent, child)?;
        parent.get().checked_prepend(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Create an element with the given tag and append it to a parent node.
    ///
    /// Returns the new element node.
    pub fn append_element(&mut self, parent: Node, tag: &str) -> Result<Node, Error> {
        let element = self.new_element(tag);
        self.append(parent, element)?;
        Ok(element)
    }

    /// Create a text node and append it to a parent node.
    pub fn append_text(&mut self, parent: Node, text: &str) -> Result<Node, Error> {
        let text_node = self.new_text(text);
        self.append(parent, text_node)?;
        Ok(text_node)
    }

    /// Create a comment node and append it to a parent node.
    pub fn append_comment(&mut self, parent: Node, comment: &str) -> Result<Node, Error> {
        let comment_node = self.new_comment(comment);
        self.append(parent, comment_node)?;
        Ok(comment_node)
    }

    /// Remove a node (and its descendants) from the tree.
    pub fn remove(&mut self, node: Node) -> Result<(), Error> {
        if self.value_type(node) == ValueType::Root {
            return Err(Error::InvalidOperation(
                "cannot remove document root".into(),
            ));
        }
        node.get().remove_subtree(self.arena_mut());
        Ok(())
    }

    /// Set an attribute on an element node.
    pub fn set_attribute(&mut self, node: Node, name: &str, value: &str) -> Result<(), Error> {
        let element = self.element_mut(node).ok_or_else(|| {
            Error::InvalidOperation("cannot set an attribute on a non-element".into())
        })?;
        element.set_attribute(name, value);
        Ok(())
    }

    /// Replace the content of an element node with a single text node.
    pub fn set_text(&mut self, node: Node, text: &str) -> Result<(), Error> {
        if self.element(node).is_none() {
            return Err(Error::InvalidOperation(
                "cannot set text on a non-element".into(),
            ));
        }
        let children: Vec<Node> = self.children(node).collect();
        for child in children {
            self.remove(child)?;
        }
        self.append_text(node, text)?;
        Ok(())
    }

    /// Append an element under the document element unless a child with the
    /// same tag already exists (idempotent insert-by-tag).
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// ldml.parse("<ldml><identity/></ldml>")?;
    /// let delimiters = ldml.new_element("delimiters");
    /// ldml.update_top_level(delimiters)?;
    /// let duplicate = ldml.new_element("delimiters");
    /// ldml.update_top_level(duplicate)?;
    /// let root = ldml.root();
    /// assert_eq!(ldml.child_elements(root).count(), 2);
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn update_top_level(&mut self, element: Node) -> Result<(), Error> {
        let tag = match self.element(element) {
            Some(el) => el.tag().to_string(),
            None => {
                return Err(Error::InvalidOperation(
                    "only elements can be inserted at the top level".into(),
                ))
            }
        };
        let root = self.root();
        if self.child_by_tag(root, &tag).is_some() {
            return Ok(());
        }
        self.append(root, element)
    }

    /// Walk a tag path from `base` (the document element when `None`),
    /// creating any missing step as an empty element.
    ///
    /// Returns the node at the end of the path.
    pub fn ensure_path(&mut self, base: Option<Node>, tags: &[&str]) -> Result<Node, Error> {
        let mut current = match base {
            Some(node) => node,
            None => self.root(),
        };
        for tag in tags {
            current = match self.child_by_tag(current, tag) {
                Some(node) => node,
                None => self.append_element(current, tag)?,
            };
        }
        Ok(current)
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        if !matches!(
            self.value_type(parent),
            ValueType::Element | ValueType::Root
        ) {
            return Err(Error::InvalidOperation(
                "cannot add children to a non-element node".into(),
            ));
        }
        if self.value_type(child) == ValueType::Root {
            return Err(Error::InvalidOperation("cannot move document root".into()));
        }
        Ok(())
    }
}
