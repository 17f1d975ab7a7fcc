use std::borrow::Cow;

use crate::{options::EmphasisStyle, theme::StyleBundle};

/// Alt text used when an image has none.
pub const IMAGE_PLACEHOLDER: &str = "图片";

/// Escapes `&`, `<`, `>` and `"` for text placed inside HTML elements or
/// double-quoted attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// What each inline construct renders to on one platform.
///
/// Arguments are the captured inner text of the construct, exactly as it
/// stands after the earlier rules have run.
pub trait InlineFlavor {
    fn code_span(&self, code: &str) -> String;
    fn bold_italic(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn italic(&self, text: &str) -> String;
    fn strikethrough(&self, text: &str) -> String;
    /// `label` is the alias when present, otherwise the link target.
    fn wiki_link(&self, label: &str) -> String;
    fn image(&self, alt: &str) -> String;
    fn link(&self, text: &str) -> String;
}

fn alt_or_placeholder(alt: &str) -> &str {
    if alt.is_empty() { IMAGE_PLACEHOLDER } else { alt }
}

/// Tagged HTML with inline-styled code spans.
pub struct HtmlInline<'s> {
    styles: &'s StyleBundle,
}

impl<'s> HtmlInline<'s> {
    pub fn new(styles: &'s StyleBundle) -> Self {
        Self { styles }
    }
}

impl InlineFlavor for HtmlInline<'_> {
    fn code_span(&self, code: &str) -> String {
        format!(
            r#"<code style="{}">{}</code>"#,
            self.styles.code,
            escape_html(code)
        )
    }

    fn bold_italic(&self, text: &str) -> String {
        format!("<strong><em>{text}</em></strong>")
    }

    fn bold(&self, text: &str) -> String {
        format!("<strong>{text}</strong>")
    }

    fn italic(&self, text: &str) -> String {
        format!("<em>{text}</em>")
    }

    fn strikethrough(&self, text: &str) -> String {
        format!("<del>{text}</del>")
    }

    // Internal links have no meaning in the article, so only the label is kept.
    fn wiki_link(&self, label: &str) -> String {
        escape_html(label).into_owned()
    }

    fn image(&self, alt: &str) -> String {
        format!("<em>[Image: {}]</em>", escape_html(alt_or_placeholder(alt)))
    }

    fn link(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Plain text: delimiters are stripped, bold gets emphasis brackets.
pub struct PlainInline {
    emphasis: EmphasisStyle,
}

impl PlainInline {
    pub fn new(emphasis: EmphasisStyle) -> Self {
        Self { emphasis }
    }
}

impl InlineFlavor for PlainInline {
    fn code_span(&self, code: &str) -> String {
        code.to_string()
    }

    fn bold_italic(&self, text: &str) -> String {
        self.emphasis.wrap(text)
    }

    fn bold(&self, text: &str) -> String {
        self.emphasis.wrap(text)
    }

    fn italic(&self, text: &str) -> String {
        text.to_string()
    }

    fn strikethrough(&self, text: &str) -> String {
        text.to_string()
    }

    fn wiki_link(&self, label: &str) -> String {
        label.to_string()
    }

    fn image(&self, alt: &str) -> String {
        format!("[图片: {}]", alt_or_placeholder(alt))
    }

    fn link(&self, text: &str) -> String {
        text.to_string()
    }
}
