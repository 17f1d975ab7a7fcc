use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use crate::document::normalize_line_endings;

static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^---\n(.*?)\n---\n?(.*)$").expect("valid frontmatter regex")
});

/// A note split into its leading `---` block and the Markdown body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Flat `key: value` pairs. Values are kept as trimmed strings.
    pub data: BTreeMap<String, String>,
    /// The body after the closing `---`, with normalized line endings.
    pub content: String,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

/// Splits YAML-style frontmatter from a note.
///
/// Only flat `key: value` lines are understood; the value is everything after
/// the first colon. Notes without frontmatter come back with an empty map.
pub fn parse_frontmatter(markdown: &str) -> Frontmatter {
    let normalized = normalize_line_endings(markdown);
    let Some(caps) = FRONTMATTER_RE.captures(&normalized) else {
        return Frontmatter {
            data: BTreeMap::new(),
            content: normalized.to_string(),
        };
    };

    let data = caps[1]
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), value.trim().to_string()))
        })
        .collect();

    Frontmatter {
        data,
        content: caps[2].to_string(),
    }
}
