use std::fmt;

use crate::ldmldata::Node;

/// The error type for all fallible ldmldoc operations.
#[derive(Debug)]
pub enum Error {
    /// An entity reference without a closing `;`.
    UnclosedEntity(String),
    /// An entity reference that is neither predefined nor a character
    /// reference.
    InvalidEntity(String),
    /// Comment text containing `--`, which cannot be serialized.
    InvalidComment(String),
    /// A close tag that does not match the open element.
    UnexpectedClose(String),
    /// The document ended with this element still open.
    UnclosedElement(String),
    /// The node is not a document root.
    NotRoot(Node),
    /// The document root has no element child.
    NoDocumentElement,
    /// The character encoding of the input could not be determined.
    UnknownEncoding,
    /// A tree manipulation that would break the document structure.
    InvalidOperation(String),
    /// Arena error from the underlying tree.
    Tree(indextree::NodeError),
    /// I/O error.
    Io(std::io::Error),
    /// Low-level XML parse error.
    Parser(xmlparser::Error),
    /// HTTP error while loading from a URL.
    Http(reqwest::Error),
}

impl From<xmlparser::Error> for Error {
    #[inline]
    fn from(e: xmlparser::Error) -> Self {
        Error::Parser(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::Tree(e)
    }
}

impl From<reqwest::Error> for Error {
    #[inline]
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnclosedEntity(s) => write!(f, "unclosed entity: {}", s),
            Error::InvalidEntity(s) => write!(f, "invalid entity: {}", s),
            Error::InvalidComment(s) => write!(f, "invalid comment: {}", s),
            Error::UnexpectedClose(s) => write!(f, "unexpected close tag: {}", s),
            Error::UnclosedElement(s) => write!(f, "unclosed element: {}", s),
            Error::NotRoot(_) => write!(f, "node is not a document root"),
            Error::NoDocumentElement => write!(f, "document has no document element"),
            Error::UnknownEncoding => write!(f, "could not determine character encoding"),
            Error::InvalidOperation(s) => write!(f, "invalid operation: {}", s),
            Error::Tree(e) => write!(f, "tree error: {}", e),
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Parser(e) => write!(f, "parse error: {}", e),
            Error::Http(e) => write!(f, "http error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Tree(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Parser(e) => Some(e),
            Error::Http(e) => Some(e),
            _ => None,
        }
    }
}
