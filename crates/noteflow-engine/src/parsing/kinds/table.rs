use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?[\s\-|:]+\|?$").expect("valid separator regex"));

/// Pipe table syntax: rows start with `|`, the second row is a separator made
/// of pipes, dashes, colons and whitespace.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    pub fn is_row(line: &str) -> bool {
        line.starts_with(Self::PIPE)
    }

    pub fn is_separator(line: &str) -> bool {
        SEPARATOR_RE.is_match(line)
    }

    /// Lookahead trigger: a separator row that actually contains a pipe, so a
    /// bare `---` under a paragraph stays a horizontal rule.
    pub fn is_lookahead_separator(line: &str) -> bool {
        line.contains(Self::PIPE) && Self::is_separator(line)
    }

    /// Splits a row into trimmed cells, dropping one outer pipe on each side.
    pub fn split_row(line: &str) -> Vec<&str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim).collect()
    }
}
