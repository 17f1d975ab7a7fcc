//! Draft payload for the Official Account content API.
//!
//! Only the payload is built here; sending it (and uploading images or the
//! cover) happens outside the engine.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    document::Document,
    frontmatter::Frontmatter,
    parsing::Block,
};

static IMAGE_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("valid image regex"));

/// One article in a `draft/add` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftArticle {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// Rendered article HTML.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_source_url: Option<String>,
    /// Media id of the cover image; required by the API, may be empty.
    pub thumb_media_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_open_comment: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_fans_can_comment: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRequest {
    pub articles: Vec<DraftArticle>,
}

/// Values used when the note's frontmatter does not provide them.
#[derive(Debug, Clone, Default)]
pub struct DraftDefaults {
    pub author: Option<String>,
    pub cover_media_id: String,
    /// Title used when there is neither a `title` key nor a heading.
    pub fallback_title: String,
}

impl DraftArticle {
    /// Builds an article from a note's frontmatter and its rendered HTML.
    ///
    /// Recognized keys: `title`, `author`, `digest` (or `description`),
    /// `source`, `cover_media_id`, `comments` and `fans_only_comments`.
    pub fn from_note(note: &Frontmatter, content: String, defaults: &DraftDefaults) -> Self {
        let title = note
            .get("title")
            .map(str::to_string)
            .or_else(|| first_heading(&note.content))
            .unwrap_or_else(|| defaults.fallback_title.clone());

        Self {
            title,
            author: note
                .get("author")
                .map(str::to_string)
                .or_else(|| defaults.author.clone()),
            digest: note
                .get("digest")
                .or_else(|| note.get("description"))
                .map(str::to_string),
            content,
            content_source_url: note.get("source").map(str::to_string),
            thumb_media_id: note
                .get("cover_media_id")
                .map(str::to_string)
                .unwrap_or_else(|| defaults.cover_media_id.clone()),
            need_open_comment: note.get("comments").and_then(parse_flag),
            only_fans_can_comment: note.get("fans_only_comments").and_then(parse_flag),
        }
    }
}

impl From<DraftArticle> for DraftRequest {
    fn from(article: DraftArticle) -> Self {
        Self {
            articles: vec![article],
        }
    }
}

fn parse_flag(value: &str) -> Option<u8> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(1),
        "false" | "no" | "0" => Some(0),
        _ => None,
    }
}

/// Text of the first heading in the document, at any level.
pub fn first_heading(markdown: &str) -> Option<String> {
    Document::new(markdown).blocks().find_map(|block| match block {
        Block::Heading { text, .. } => Some(text.trim().to_string()),
        _ => None,
    })
}

/// An image referenced with `![alt](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub alt: String,
    pub url: String,
}

impl ImageRef {
    /// True for paths that would have to be uploaded before publishing.
    pub fn is_local(&self) -> bool {
        let url = self.url.trim();
        !(url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:"))
    }
}

/// Every image reference in the note, in order of appearance.
pub fn image_references(markdown: &str) -> Vec<ImageRef> {
    IMAGE_REF_RE
        .captures_iter(markdown)
        .map(|caps| ImageRef {
            alt: caps[1].to_string(),
            url: caps[2].to_string(),
        })
        .collect()
}
