use std::sync::LazyLock;

use regex::Regex;

static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("valid ordered list regex"));

/// Unordered list item: `-`, `*` or `+` followed by whitespace.
pub struct BulletItem;

impl BulletItem {
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    /// Returns the item text with the marker and the following whitespace
    /// character removed.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKERS)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => None,
        }
    }

    pub fn matches(line: &str) -> bool {
        Self::strip(line).is_some()
    }
}

/// Ordered list item: digits, a literal `.`, then whitespace.
///
/// The source numeral is discarded; renderers number items themselves.
pub struct OrderedItem;

impl OrderedItem {
    pub fn strip(line: &str) -> Option<&str> {
        let m = ORDERED_RE.find(line)?;
        Some(&line[m.end()..])
    }

    pub fn matches(line: &str) -> bool {
        ORDERED_RE.is_match(line)
    }
}
