use xmlparser::{ElementEnd, Token, Tokenizer};

use crate::entity::parse_entities;
use crate::error::Error;
use crate::ldmldata::{Ldml, Node};
use crate::value::{Comment, Element, Text, Value};

fn full_name(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!("{}:{}", prefix, local)
    }
}

struct DocumentBuilder<'a> {
    ldml: &'a mut Ldml,
    root: Node,
    current: Node,
}

impl<'a> DocumentBuilder<'a> {
    fn new(ldml: &'a mut Ldml) -> Self {
        let root = ldml.new_node(Value::Root);
        DocumentBuilder {
            ldml,
            root,
            current: root,
        }
    }

    fn append(&mut self, node: Node) -> Result<(), Error> {
        self.current
            .get()
            .checked_append(node.get(), self.ldml.arena_mut())?;
        Ok(())
    }

    fn element_start(&mut self, prefix: &str, local: &str) -> Result<(), Error> {
        let tag = full_name(prefix, local);
        let node = self.ldml.new_node(Value::Element(Element::new(tag)));
        self.append(node)?;
        self.current = node;
        Ok(())
    }

    fn attribute(&mut self, prefix: &str, local: &str, value: &str) -> Result<(), Error> {
        let name = full_name(prefix, local);
        let value = parse_entities(value.into())?;
        if let Some(element) = self.ldml.element_mut(self.current) {
            element.set_attribute(name, value.into_owned());
        }
        Ok(())
    }

    fn text(&mut self, raw: &str) -> Result<(), Error> {
        let text = parse_entities(raw.into())?;
        // consolidate with a preceding text node; CDATA sections arrive as
        // separate tokens within the same text run
        let arena = self.ldml.arena_mut();
        if let Some(last) = arena[self.current.get()].last_child() {
            if let Value::Text(existing) = arena[last].get_mut() {
                let mut s = existing.get().to_string();
                s.push_str(&text);
                existing.set(s);
                return Ok(());
            }
        }
        let node = self
            .ldml
            .new_node(Value::Text(Text::new(text.into_owned())));
        self.append(node)
    }

    fn cdata(&mut self, raw: &str) -> Result<(), Error> {
        // CDATA content is literal; no entity resolution
        let arena = self.ldml.arena_mut();
        if let Some(last) = arena[self.current.get()].last_child() {
            if let Value::Text(existing) = arena[last].get_mut() {
                let mut s = existing.get().to_string();
                s.push_str(raw);
                existing.set(s);
                return Ok(());
            }
        }
        let node = self
            .ldml
            .new_node(Value::Text(Text::new(raw.to_string())));
        self.append(node)
    }

    fn comment(&mut self, text: &str) -> Result<(), Error> {
        let node = self
            .ldml
            .new_node(Value::Comment(Comment::new(text.to_string())));
        self.append(node)
    }

    fn close_element(&mut self, prefix: &str, local: &str) -> Result<(), Error> {
        let tag = full_name(prefix, local);
        match self.ldml.element(self.current) {
            Some(element) if element.tag() == tag => {}
            _ => return Err(Error::UnexpectedClose(tag)),
        }
        self.pop();
        Ok(())
    }

    fn close_empty(&mut self) {
        self.pop();
    }

    fn pop(&mut self) {
        if let Some(parent) = self.ldml.parent(self.current) {
            self.current = parent;
        }
    }

    fn finish(self) -> Result<Node, Error> {
        if self.current != self.root {
            let tag = self
                .ldml
                .tag(self.current)
                .unwrap_or_default()
                .to_string();
            return Err(Error::UnclosedElement(tag));
        }
        Ok(self.root)
    }
}

/// ## Parsing
impl Ldml {
    /// Parse XML text into a tree and make it the current document.
    ///
    /// Returns the new document root. Comments are preserved; the XML
    /// declaration, processing instructions and doctype are skipped.
    ///
    /// ```rust
    /// let mut ldml = ldmldoc::Ldml::new();
    /// let root = ldml.parse(r#"<ldml><identity><language type="mql"/></identity></ldml>"#)?;
    /// assert_eq!(ldml.document(), Some(root));
    /// # Ok::<(), ldmldoc::Error>(())
    /// ```
    pub fn parse(&mut self, xml: &str) -> Result<Node, Error> {
        let mut builder = DocumentBuilder::new(self);

        for token in Tokenizer::from(xml) {
            match token? {
                Token::ElementStart { prefix, local, .. } => {
                    builder.element_start(prefix.as_str(), local.as_str())?;
                }
                Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                } => {
                    builder.attribute(prefix.as_str(), local.as_str(), value.as_str())?;
                }
                Token::ElementEnd { end, .. } => match end {
                    ElementEnd::Open => {}
                    ElementEnd::Close(prefix, local) => {
                        builder.close_element(prefix.as_str(), local.as_str())?;
                    }
                    ElementEnd::Empty => {
                        builder.close_empty();
                    }
                },
                Token::Text { text } => {
                    builder.text(text.as_str())?;
                }
                Token::Cdata { text, .. } => {
                    builder.cdata(text.as_str())?;
                }
                Token::Comment { text, .. } => {
                    builder.comment(text.as_str())?;
                }
                Token::Declaration { .. }
                | Token::ProcessingInstruction { .. }
                | Token::DtdStart { .. }
                | Token::EmptyDtd { .. }
                | Token::EntityDeclaration { .. }
                | Token::DtdEnd { .. } => {}
            }
        }

        let root = builder.finish()?;
        self.document = Some(root);
        Ok(root)
    }
}
