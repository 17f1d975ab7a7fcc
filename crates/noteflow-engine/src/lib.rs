//! Markdown transformation engine for WeChat Official Account articles and
//! Xiaohongshu posts.
//!
//! One line-oriented block segmenter and one inline rule table feed two
//! renderers: styled HTML for WeChat and stylized plain text for Xiaohongshu.

pub mod document;
pub mod draft;
pub mod frontmatter;
pub mod inline;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;
pub mod theme;

// Re-export key types for easier usage
pub use document::{Document, normalize_line_endings};
pub use draft::{DraftArticle, DraftDefaults, DraftRequest, ImageRef, image_references};
pub use frontmatter::{Frontmatter, parse_frontmatter};
pub use options::{EmphasisStyle, HeadingStyle, RenderOptions};
pub use parsing::Block;
pub use render::{Platform, WechatRenderer, XhsRenderer, markdown_to_wechat, markdown_to_xhs};
pub use theme::{DEFAULT_THEME, StyleBundle, ThemeRegistry};
