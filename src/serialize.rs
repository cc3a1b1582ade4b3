use std::io::Write;

use indextree::{NodeEdge, NodeId};

use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::ldmldata::{Ldml, Node};
use crate::value::{Element, Value};

/// The media type served for downloadable LDML documents.
pub const XML_MEDIA_TYPE: &str = "text/xml;charset=utf8";

/// A typed chunk of serialized XML, ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content_type: &'static str,
    data: Vec<u8>,
}

impl Blob {
    /// The media type of the blob.
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    /// The serialized bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the blob, returning the serialized bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// ## Serialization
impl Ldml {
    /// Serialize a node and all its descendants as XML text.
    pub fn serialize(&self, node: Node, w: &mut impl Write) -> Result<(), Error> {
        for edge in node.get().traverse(self.arena()) {
            match edge {
                NodeEdge::Start(node_id) => self.serialize_edge_start(node_id, w)?,
                NodeEdge::End(node_id) => self.serialize_edge_end(node_id, w)?,
            }
        }
        Ok(())
    }

    /// Serialize a node to a string.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// let root = ldml.parse(r#"<ldml><script type="Latn"/></ldml>"#)?;
    /// assert_eq!(
    ///     ldml.to_string(root)?,
    ///     r#"<ldml><script type="Latn"/></ldml>"#
    /// );
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn to_string(&self, node: Node) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.serialize(node, &mut buffer)?;
        into_string(buffer)
    }

    /// Serialize a node to a string, indenting element-only content.
    ///
    /// Elements with text content are kept on one line so that no
    /// significant whitespace is introduced.
    pub fn to_string_pretty(&self, node: Node) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.serialize_pretty_node(node.get(), 0, &mut buffer)?;
        into_string(buffer)
    }

    /// Serialize the current document to a typed blob for download,
    /// prefixed with an XML declaration.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// ldml.parse("<ldml/>")?;
    /// let blob = ldml.blob()?;
    /// assert_eq!(blob.content_type(), ldmldoc::XML_MEDIA_TYPE);
    /// assert!(blob.data().starts_with(b"<?xml"));
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn blob(&mut self) -> Result<Blob, Error> {
        let document = self.document_root();
        let mut data = Vec::new();
        data.extend_from_slice(b"<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        self.serialize(document, &mut data)?;
        Ok(Blob {
            content_type: XML_MEDIA_TYPE,
            data,
        })
    }

    fn write_start_tag(
        &self,
        node_id: NodeId,
        element: &Element,
        w: &mut impl Write,
    ) -> Result<(), Error> {
        write!(w, "<{}", element.tag())?;
        for (name, value) in element.attributes().iter() {
            write!(w, " {}=\"{}\"", name, serialize_attribute(value.into()))?;
        }
        if node_id.children(self.arena()).next().is_none() {
            write!(w, "/>")?;
        } else {
            write!(w, ">")?;
        }
        Ok(())
    }

    fn serialize_edge_start(&self, node_id: NodeId, w: &mut impl Write) -> Result<(), Error> {
        match self.arena()[node_id].get() {
            Value::Root => {}
            Value::Element(element) => self.write_start_tag(node_id, element, w)?,
            Value::Text(text) => write!(w, "{}", serialize_text(text.get().into()))?,
            Value::Comment(comment) => write!(w, "<!--{}-->", comment.get())?,
        }
        Ok(())
    }

    fn serialize_edge_end(&self, node_id: NodeId, w: &mut impl Write) -> Result<(), Error> {
        if let Value::Element(element) = self.arena()[node_id].get() {
            if node_id.children(self.arena()).next().is_some() {
                write!(w, "</{}>", element.tag())?;
            }
        }
        Ok(())
    }

    fn serialize_pretty_node(
        &self,
        node_id: NodeId,
        depth: usize,
        w: &mut impl Write,
    ) -> Result<(), Error> {
        const INDENT: usize = 2;
        match self.arena()[node_id].get() {
            Value::Root => {
                for child in node_id.children(self.arena()) {
                    self.serialize_pretty_node(child, 0, w)?;
                    writeln!(w)?;
                }
            }
            Value::Text(text) => write!(w, "{}", serialize_text(text.get().into()))?,
            Value::Comment(comment) => write!(w, "<!--{}-->", comment.get())?,
            Value::Element(element) => {
                self.write_start_tag(node_id, element, w)?;
                let children: Vec<NodeId> = node_id.children(self.arena()).collect();
                if children.is_empty() {
                    return Ok(());
                }
                let element_only = children
                    .iter()
                    .all(|&child| !matches!(self.arena()[child].get(), Value::Text(_)));
                if element_only {
                    for &child in &children {
                        writeln!(w)?;
                        write!(w, "{:width$}", "", width = (depth + 1) * INDENT)?;
                        self.serialize_pretty_node(child, depth + 1, w)?;
                    }
                    writeln!(w)?;
                    write!(w, "{:width$}", "", width = depth * INDENT)?;
                } else {
                    for &child in &children {
                        self.serialize(Node::new(child), w)?;
                    }
                }
                write!(w, "</{}>", element.tag())?;
            }
        }
        Ok(())
    }
}

fn into_string(buffer: Vec<u8>) -> Result<String, Error> {
    String::from_utf8(buffer)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
