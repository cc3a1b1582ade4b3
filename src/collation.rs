//! A model of LDML/ICU sort tailorings, used for the contents of a
//! `collations/collation/cr` element.

/// Turn normal Unicode into escaped tailoring syntax.
///
/// Syntax characters are backslash-escaped; anything outside printable
/// ASCII becomes a `\uXXXX` or `\UXXXXXXXX` escape.
pub fn escape(s: &str) -> String {
    let mut res = String::new();
    for c in s.chars() {
        if matches!(c, '\\' | '&' | '[' | ']' | '/' | '<') {
            res.push('\\');
            res.push(c);
            continue;
        }
        let i = c as u32;
        if (33..127).contains(&i) {
            res.push(c);
        } else if i > 0xFFFF {
            res.push_str(&format!("\\U{:08X}", i));
        } else {
            res.push_str(&format!("\\u{:04X}", i));
        }
    }
    res
}

/// Parse tailoring escaped characters back into normal Unicode.
///
/// Escapes that do not form a valid character are kept literally, minus
/// the backslash.
pub fn unescape(s: &str) -> String {
    let mut res = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(marker @ ('u' | 'U')) => {
                let len = if marker == 'u' { 4 } else { 8 };
                let hex: String = chars.clone().skip(1).take(len).collect();
                let decoded = if hex.len() == len {
                    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                chars.next();
                if let Some(decoded) = decoded {
                    for _ in 0..len {
                        chars.next();
                    }
                    res.push(decoded);
                } else {
                    res.push(marker);
                }
            }
            Some(other) => {
                res.push(other);
                chars.next();
            }
            None => res.push('\\'),
        }
    }
    res
}

/// One tailored element: its base (the key it sorts after) and the level
/// of the difference. Levels 1 to 3 are primary to tertiary; 4 means
/// equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollElement {
    base: String,
    level: u8,
}

impl CollElement {
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

/// An ordered sort tailoring: keys with the element describing how each
/// sorts relative to its base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collation {
    entries: Vec<(String, CollElement)>,
}

// Paratext does not allow "x/X" case pairs, so users write "x X"; when a
// line is exactly two case-equivalent items, read it as the pair they meant
fn normalize_case_pair(line: &str) -> String {
    let items: Vec<&str> = line.split_whitespace().collect();
    if items.len() == 2 && case_equivalent(items[0], items[1]) {
        return format!("{}/{}", items[0], items[1]);
    }
    line.to_string()
}

fn case_equivalent(a: &str, b: &str) -> bool {
    a.to_lowercase() == b || b.to_lowercase() == a
}

// split a tailoring run like "a << b" into ["a", "<<", "b"]
fn split_relations(run: &str) -> Vec<String> {
    let mut bits = Vec::new();
    let mut current = String::new();
    let mut in_separator = false;
    for c in run.chars() {
        let is_separator = c == '<' || c == '=';
        if is_separator != in_separator {
            bits.push(current.trim().to_string());
            current = String::new();
            in_separator = is_separator;
        }
        current.push(c);
    }
    bits.push(current.trim().to_string());
    bits
}

impl Collation {
    pub fn new() -> Self {
        Collation {
            entries: Vec::new(),
        }
    }

    /// Parse LDML/ICU sort tailoring syntax.
    ///
    /// ```rust
    /// use ldmldoc::Collation;
    ///
    /// let coll = Collation::parse("&a < b <<< B << c");
    /// assert_eq!(coll.get("b").unwrap().base(), "a");
    /// assert_eq!(coll.get("B").unwrap().level(), 3);
    /// assert_eq!(coll.get("c").unwrap().base(), "B");
    /// ```
    pub fn parse(tailoring: &str) -> Self {
        let mut collation = Collation::new();
        for run in tailoring.split('&') {
            if run.trim().is_empty() {
                continue;
            }
            let bits = split_relations(run);
            let mut base = unescape(&bits[0]);
            let mut i = 1;
            while i + 1 < bits.len() {
                let level = if bits[i] == "=" {
                    4
                } else {
                    bits[i].matches('<').count() as u8
                };
                let key = unescape(&bits[i + 1]);
                collation
                    .entries
                    .push((key.clone(), CollElement { base, level }));
                base = key;
                i += 2;
            }
        }
        collation
    }

    /// Build a tailoring from Paratext-style sorted character lines.
    ///
    /// Each line anchors a `&` reset at its first item; space-separated
    /// items differ at the secondary level and slash-separated case pairs
    /// at the tertiary level.
    pub fn from_sort_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut collation = Collation::new();
        for line in lines {
            let line = normalize_case_pair(line.as_ref());
            let mut previous: Option<String> = None;
            for item in line.split_whitespace() {
                for (index, sub) in item.split('/').enumerate() {
                    if sub.is_empty() {
                        continue;
                    }
                    let key = unescape(sub);
                    let base = match previous.replace(key.clone()) {
                        Some(base) => base,
                        // the first item of a line is only an anchor
                        None => continue,
                    };
                    let level = if index > 0 { 3 } else { 2 };
                    collation.entries.push((key, CollElement { base, level }));
                }
            }
        }
        collation
    }

    /// Returns ICU tailoring syntax of this collation.
    pub fn as_icu(&self) -> String {
        let mut res = String::new();
        let mut last_key: Option<&str> = None;
        for (key, element) in &self.entries {
            if last_key != Some(element.base.as_str()) {
                res.push_str("\n&");
                res.push_str(&escape(&element.base));
            }
            if element.level == 4 {
                res.push('=');
            } else {
                res.push(' ');
                res.push_str(&"<<<"[..element.level.min(3) as usize]);
                res.push(' ');
            }
            res.push_str(&escape(key));
            last_key = Some(key.as_str());
        }
        if res.is_empty() {
            res
        } else {
            res[1..].to_string()
        }
    }

    /// Look up the element for a tailored key.
    pub fn get(&self, key: &str) -> Option<&CollElement> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, element)| element)
    }

    /// Iterate over entries in tailoring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CollElement)> + '_ {
        self.entries
            .iter()
            .map(|(key, element)| (key.as_str(), element))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
