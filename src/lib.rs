#![forbid(unsafe_code)]

//! Ldmldoc loads LDML (Locale Data Markup Language) documents from a file or
//! a URL, holds them as an in-memory element tree, and provides lookup and
//! editing helpers for locale data: finding children by tag, descending tag
//! paths, skipping `alt` variants, idempotent top-level inserts, and
//! serialization back to downloadable XML.
//!
//! Tags are stored as prefixed strings (`sil:font`) and namespace
//! declarations are kept as plain attributes; there is no namespace
//! resolution machinery.

mod access;
mod collation;
mod creation;
mod encoding;
mod entity;
mod error;
mod ldmldata;
mod load;
mod manipulation;
mod parse;
mod serialize;
mod ssf;
mod value;

pub use collation::{escape, unescape, CollElement, Collation};
pub use error::Error;
pub use ldmldata::{Ldml, Node, SIL_NAMESPACE};
pub use serialize::{Blob, XML_MEDIA_TYPE};
pub use ssf::SsfData;
pub use value::{Attributes, Comment, Element, Text, Value, ValueType};
