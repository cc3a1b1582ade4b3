use indextree::{Arena, NodeId};

use crate::value::Value;

pub(crate) type LdmlArena = Arena<Value>;

/// The namespace for SIL extensions to LDML, declared on a lazily created
/// document element.
pub const SIL_NAMESPACE: &str = "urn://www.sil.org/ldml/0.1";

/// A node in the LDML tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// The `Ldml` struct holds one LDML document as an element tree and is the
/// entry point for loading, lookup, editing and serialization.
///
/// It is implemented in several sections focusing on different aspects of
/// working with the document.
///
/// The document handle is replaced wholesale by the next load; nodes
/// obtained from a previous document are dangling afterwards.
pub struct Ldml {
    pub(crate) arena: LdmlArena,
    pub(crate) document: Option<Node>,
}

impl Ldml {
    /// Create a new `Ldml` instance without a document.
    pub fn new() -> Self {
        Ldml {
            arena: LdmlArena::new(),
            document: None,
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &LdmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut LdmlArena {
        &mut self.arena
    }

    /// The current document handle, if any.
    pub fn document(&self) -> Option<Node> {
        self.document
    }

    /// The document root, created empty if no document has been loaded.
    pub fn document_root(&mut self) -> Node {
        if let Some(document) = self.document {
            return document;
        }
        let document = self.new_node(Value::Root);
        self.document = Some(document);
        document
    }

    /// The document element, creating `<ldml xmlns:sil="…"/>` under a fresh
    /// root if absent.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// let root = ldml.root();
    /// let element = ldml.element(root).unwrap();
    /// assert_eq!(element.tag(), "ldml");
    /// assert_eq!(element.get_attribute("xmlns:sil"), Some(ldmldoc::SIL_NAMESPACE));
    /// ```
    pub fn root(&mut self) -> Node {
        let document = self.document_root();
        let existing = self
            .children(document)
            .find(|&child| matches!(self.value(child), Value::Element(_)));
        if let Some(element) = existing {
            return element;
        }
        let element = self.new_element("ldml");
        if let Some(el) = self.element_mut(element) {
            el.set_attribute("xmlns:sil", SIL_NAMESPACE);
        }
        // a fresh element cannot fail to attach
        document.get().append(element.get(), self.arena_mut());
        element
    }
}

impl Default for Ldml {
    fn default() -> Self {
        Self::new()
    }
}
