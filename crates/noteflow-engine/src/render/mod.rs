//! # Renderers
//!
//! Two independent renderers over the same block segmentation:
//!
//! - **`html`**: `WechatRenderer`, a styled HTML fragment for the WeChat
//!   Official Account editor
//! - **`plain`**: `XhsRenderer`, stylized plain text for Xiaohongshu posts
//! - **`wrap`**: soft wrap and blank-line collapsing for plain text
//!
//! Rendering is a pure function of the Markdown text and the options.

pub mod html;
pub mod plain;
pub mod wrap;

pub use html::WechatRenderer;
pub use plain::XhsRenderer;

use crate::{options::RenderOptions, theme::ThemeRegistry};

/// Target platform of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Wechat,
    Xhs,
}

impl Platform {
    pub fn render(self, markdown: &str, options: &RenderOptions, themes: &ThemeRegistry) -> String {
        match self {
            Platform::Wechat => WechatRenderer::new(themes, options).render(markdown),
            Platform::Xhs => XhsRenderer::new(options).render(markdown),
        }
    }
}

/// Renders WeChat HTML using the built-in themes.
pub fn markdown_to_wechat(markdown: &str, options: &RenderOptions) -> String {
    Platform::Wechat.render(markdown, options, &ThemeRegistry::builtin())
}

/// Renders Xiaohongshu plain text.
pub fn markdown_to_xhs(markdown: &str, options: &RenderOptions) -> String {
    XhsRenderer::new(options).render(markdown)
}
