use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_THEME;

/// Bracket pair used for bold text in plain-text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmphasisStyle {
    /// `「text」`
    #[default]
    #[serde(rename = "「」")]
    Corner,
    /// `【text】`
    #[serde(rename = "【】")]
    Lenticular,
}

impl EmphasisStyle {
    pub fn wrap(self, text: &str) -> String {
        match self {
            EmphasisStyle::Corner => format!("「{text}」"),
            EmphasisStyle::Lenticular => format!("【{text}】"),
        }
    }
}

/// Heading markers used in plain-text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `【H1】`, `▎H2`
    #[default]
    Brackets,
    /// `✨ H1 ✨`, `✅ H2`
    Emoji,
}

/// Per-call rendering configuration.
///
/// `heading_shift` and `theme` only affect HTML output; the remaining fields
/// only affect plain-text output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render H1 as H2, H2 as H3 and so on, clamped at H6.
    pub heading_shift: bool,
    /// Theme id, resolved against a `ThemeRegistry`.
    pub theme: String,
    pub emphasis_style: EmphasisStyle,
    pub heading_style: HeadingStyle,
    /// Soft-wrap width for paragraphs; 0 disables wrapping.
    pub max_line_length: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_shift: true,
            theme: DEFAULT_THEME.to_string(),
            emphasis_style: EmphasisStyle::default(),
            heading_style: HeadingStyle::default(),
            max_line_length: 60,
        }
    }
}
