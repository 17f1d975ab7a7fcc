use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"));

/// ATX heading: one to six `#`, whitespace, then text.
pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the level and the heading text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = HEADING_RE.captures(line)?;
        let hashes = caps.get(1)?.as_str();
        let text = caps.get(2)?.as_str();
        Some((hashes.len() as u8, text))
    }

    /// Moves a heading down one level (H1 becomes H2), clamped at H6.
    pub fn shift(level: u8) -> u8 {
        (level + 1).min(Self::MAX_LEVEL)
    }
}
