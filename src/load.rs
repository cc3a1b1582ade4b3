use std::path::Path;

use tracing::debug;

use crate::encoding::detect_encoding;
use crate::error::Error;
use crate::ldmldata::{Ldml, Node};

/// ## Loading
///
/// Each load replaces the held document wholesale. Nodes from the previous
/// document are dangling afterwards; nothing protects a consumer holding on
/// to them across a load.
impl Ldml {
    /// Load a document from a local file, detecting its character encoding.
    ///
    /// Returns the new document root.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Node, Error> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = data.len(), "loading LDML document from file");
        let text = decode(&data)?;
        self.load_text(&text)
    }

    /// Load a document over HTTP.
    ///
    /// Returns the new document root; any transport or status failure
    /// surfaces as [`Error::Http`] and leaves the current document in
    /// place.
    pub fn load_from_url(&mut self, url: &str) -> Result<Node, Error> {
        debug!(url, "loading LDML document from URL");
        let response = reqwest::blocking::get(url)?.error_for_status()?;
        let text = response.text()?;
        self.load_text(&text)
    }

    fn load_text(&mut self, text: &str) -> Result<Node, Error> {
        let mut fresh = Ldml::new();
        let root = fresh.parse(text)?;
        *self = fresh;
        Ok(root)
    }
}

fn decode(data: &[u8]) -> Result<String, Error> {
    let encoding = detect_encoding(data, None).ok_or(Error::UnknownEncoding)?;
    let (text, _, had_errors) = encoding.decode(data);
    if had_errors {
        debug!(encoding = encoding.name(), "replacement characters during decode");
    }
    Ok(text.into_owned())
}
