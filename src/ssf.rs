//! Import of Paratext project settings (.ssf) and sort order (.lds) files
//! into an LDML document.

use crate::collation::Collation;
use crate::error::Error;
use crate::ldmldata::{Ldml, Node};

/// The language-relevant fields of a Paratext .ssf settings file.
///
/// Every field is optional; a missing element leaves it `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsfData {
    pub default_font: Option<String>,
    pub default_font_size: Option<String>,
    pub valid_characters: Option<String>,
    pub valid_punctuation: Option<String>,
    pub pairs: Option<String>,
    pub quotes: Option<String>,
    pub inner_quotes: Option<String>,
    pub inner_inner_quotes: Option<String>,
    pub continue_quotes: Option<String>,
    pub continue_inner_quotes: Option<String>,
    pub continuer: Option<String>,
    pub inner_continuer: Option<String>,
    pub inner_inner_continuer: Option<String>,
    pub verbose_quotes: Option<String>,
}

impl SsfData {
    /// Extract the known fields from an SSF XML document. The first
    /// occurrence of each field wins.
    pub fn parse(xml: &str) -> Result<Self, Error> {
        let mut tree = Ldml::new();
        let root = tree.parse(xml)?;
        let mut ssf = SsfData::default();
        for node in tree.descendants(root) {
            let tag = match tree.tag(node) {
                Some(tag) => tag.to_string(),
                None => continue,
            };
            let field = match ssf.field_mut(&tag) {
                Some(field) => field,
                None => continue,
            };
            if field.is_some() {
                continue;
            }
            if let Some(text) = tree.text_content_str(node) {
                let text = text.trim();
                if !text.is_empty() {
                    *field = Some(text.to_string());
                }
            }
        }
        Ok(ssf)
    }

    fn field_mut(&mut self, tag: &str) -> Option<&mut Option<String>> {
        match tag {
            "DefaultFont" => Some(&mut self.default_font),
            "DefaultFontSize" => Some(&mut self.default_font_size),
            "ValidCharacters" => Some(&mut self.valid_characters),
            "ValidPunctuation" => Some(&mut self.valid_punctuation),
            "Pairs" => Some(&mut self.pairs),
            "Quotes" => Some(&mut self.quotes),
            "InnerQuotes" => Some(&mut self.inner_quotes),
            "InnerInnerQuotes" => Some(&mut self.inner_inner_quotes),
            "ContinueQuotes" => Some(&mut self.continue_quotes),
            "ContinueInnerQuotes" => Some(&mut self.continue_inner_quotes),
            "Continuer" => Some(&mut self.continuer),
            "InnerContinuer" => Some(&mut self.inner_continuer),
            "InnerInnerContinuer" => Some(&mut self.inner_inner_continuer),
            "VerboseQuotes" => Some(&mut self.verbose_quotes),
            _ => None,
        }
    }
}

/// ## Paratext settings import
impl Ldml {
    /// Merge Paratext settings into the LDML document.
    ///
    /// Fonts land under `special/sil:external-resources`, matched
    /// punctuation pairs and quotation marks under `delimiters`, and
    /// exemplar characters under `characters`. Merging the same settings
    /// twice does not duplicate anything.
    pub fn merge_ssf(&mut self, ssf: &SsfData) -> Result<(), Error> {
        if ssf.default_font.is_some() || ssf.default_font_size.is_some() {
            self.merge_font(ssf.default_font.as_deref(), ssf.default_font_size.as_deref())?;
        }
        if let Some(pairs) = &ssf.pairs {
            self.merge_pairs(pairs)?;
        }
        if let Some(quotes) = &ssf.quotes {
            self.merge_quotes(quotes, "quotationStart", "quotationEnd")?;
        }
        if let Some(quotes) = &ssf.inner_quotes {
            self.merge_quotes(
                quotes,
                "alternateQuotationStart",
                "alternateQuotationEnd",
            )?;
        }
        if let Some(quotes) = &ssf.inner_inner_quotes {
            if let Some((open, close)) = split_pair(quotes) {
                let marks = self.quotation_marks("3")?;
                self.set_attribute(marks, "open", &open)?;
                self.set_attribute(marks, "close", &close)?;
            }
        }
        if let Some(value) = continue_type(&ssf.continue_quotes) {
            let marks = self.quotation_marks("1")?;
            self.set_attribute(marks, "paraContinueType", &value)?;
        }
        if let Some(value) = continue_type(&ssf.continue_inner_quotes) {
            let marks = self.quotation_marks("2")?;
            self.set_attribute(marks, "paraContinueType", &value)?;
        }
        if let Some(characters) = &ssf.valid_characters {
            let exemplar = self.ensure_path(None, &["characters", "exemplarCharacters"])?;
            self.set_text(exemplar, &exemplar_set(characters))?;
        }
        if let Some(punctuation) = &ssf.valid_punctuation {
            let exemplar = self.exemplar_characters("punctuation")?;
            self.set_text(exemplar, &exemplar_set(punctuation))?;
        }
        Ok(())
    }

    /// Merge a Paratext .lds sort order into
    /// `collations/collation[@type="standard"]/cr`.
    pub fn merge_lds(&mut self, lds: &str) -> Result<(), Error> {
        let lines = lds_characters(lds);
        if lines.is_empty() {
            return Ok(());
        }
        let tailoring = Collation::from_sort_lines(&lines).as_icu();
        let collations = self.ensure_path(None, &["collations"])?;
        let collation = self.child_with_attribute(collations, "collation", "type", "standard");
        let collation = match collation {
            Some(node) => node,
            None => {
                let node = self.append_element(collations, "collation")?;
                self.set_attribute(node, "type", "standard")?;
                node
            }
        };
        let cr = match self.child_by_tag(collation, "cr") {
            Some(node) => node,
            None => self.append_element(collation, "cr")?,
        };
        self.set_text(cr, &tailoring)
    }

    fn merge_font(&mut self, name: Option<&str>, size: Option<&str>) -> Result<(), Error> {
        let font = self.ensure_path(None, &["special", "sil:external-resources", "sil:font"])?;
        if let Some(name) = name {
            self.set_attribute(font, "name", name)?;
        }
        if let Some(size) = size {
            self.set_attribute(font, "size", size)?;
        }
        Ok(())
    }

    fn merge_pairs(&mut self, pairs: &str) -> Result<(), Error> {
        let matched =
            self.ensure_path(None, &["delimiters", "special", "sil:matched-pairs"])?;
        for pair in pairs.split_whitespace() {
            let (open, close) = match pair.split_once('/') {
                Some((open, close)) => (open.trim(), close.trim()),
                None => continue,
            };
            let exists = self.children(matched).any(|child| {
                self.element(child).map_or(false, |element| {
                    element.tag() == "sil:matched-pair"
                        && element.get_attribute("open") == Some(open)
                        && element.get_attribute("close") == Some(close)
                })
            });
            if exists {
                continue;
            }
            let node = self.append_element(matched, "sil:matched-pair")?;
            self.set_attribute(node, "open", open)?;
            self.set_attribute(node, "close", close)?;
        }
        Ok(())
    }

    fn merge_quotes(&mut self, quotes: &str, start_tag: &str, end_tag: &str) -> Result<(), Error> {
        let (open, close) = match split_pair(quotes) {
            Some(pair) => pair,
            None => return Ok(()),
        };
        let start = self.ensure_path(None, &["delimiters", start_tag])?;
        self.set_text(start, &open)?;
        let end = self.ensure_path(None, &["delimiters", end_tag])?;
        self.set_text(end, &close)?;
        Ok(())
    }

    fn quotation_marks(&mut self, level: &str) -> Result<Node, Error> {
        let special = self.ensure_path(None, &["delimiters", "special"])?;
        let existing =
            self.child_with_attribute(special, "sil:quotation-marks", "level", level);
        match existing {
            Some(node) => Ok(node),
            None => {
                let node = self.append_element(special, "sil:quotation-marks")?;
                self.set_attribute(node, "level", level)?;
                Ok(node)
            }
        }
    }

    fn exemplar_characters(&mut self, kind: &str) -> Result<Node, Error> {
        let characters = self.ensure_path(None, &["characters"])?;
        let existing =
            self.child_with_attribute(characters, "exemplarCharacters", "type", kind);
        match existing {
            Some(node) => Ok(node),
            None => {
                let node = self.append_element(characters, "exemplarCharacters")?;
                self.set_attribute(node, "type", kind)?;
                Ok(node)
            }
        }
    }

    fn child_with_attribute(
        &self,
        base: Node,
        tag: &str,
        name: &str,
        value: &str,
    ) -> Option<Node> {
        self.children(base).find(|&child| {
            self.element(child).map_or(false, |element| {
                element.tag() == tag && element.get_attribute(name) == Some(value)
            })
        })
    }
}

// SSF lists characters space-separated; LDML exemplar sets are bracketed
fn exemplar_set(value: &str) -> String {
    format!("[{}]", value.trim())
}

fn split_pair(value: &str) -> Option<(String, String)> {
    let (open, close) = value.split_once(' ')?;
    let open = open.trim();
    let close = close.trim();
    if open.is_empty() || close.is_empty() {
        return None;
    }
    Some((open.to_string(), close.to_string()))
}

// "no"/"false" and absence both mean no continuation marks
fn continue_type(value: &Option<String>) -> Option<String> {
    let value = value.as_deref()?.trim();
    if value.is_empty()
        || value.eq_ignore_ascii_case("no")
        || value.eq_ignore_ascii_case("false")
    {
        return None;
    }
    Some(value.to_string())
}

// the [Characters] section of a .lds file holds ChrNN keys in sort order
fn lds_characters(lds: &str) -> Vec<String> {
    let mut in_section = false;
    let mut numbered: Vec<(u32, String)> = Vec::new();
    for line in lds.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_section = line.eq_ignore_ascii_case("[characters]");
            continue;
        }
        if !in_section || line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => continue,
        };
        let number = key
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("chr"))
            .and_then(|_| key[3..].parse::<u32>().ok());
        if let Some(number) = number {
            numbered.push((number, value.to_string()));
        }
    }
    numbered.sort_by_key(|(number, _)| *number);
    numbered.into_iter().map(|(_, value)| value).collect()
}
