//! WeChat article HTML.
//!
//! Every element carries its style inline, taken from the active
//! [`StyleBundle`]. Only code blocks, code spans, wiki-link labels and image
//! alt text are entity-escaped; other text is inserted as written.

use crate::{
    document::Document,
    inline::{HtmlInline, escape_html, process_inline},
    options::RenderOptions,
    parsing::{Block, TableBlock, kinds::Heading},
    theme::{StyleBundle, ThemeRegistry},
};

/// Renders Markdown as a single styled HTML fragment.
pub struct WechatRenderer<'t> {
    styles: &'t StyleBundle,
    heading_shift: bool,
}

impl<'t> WechatRenderer<'t> {
    /// Resolves the theme named in `options` against `themes`.
    pub fn new(themes: &'t ThemeRegistry, options: &RenderOptions) -> Self {
        Self::with_styles(themes.resolve(&options.theme), options.heading_shift)
    }

    pub fn with_styles(styles: &'t StyleBundle, heading_shift: bool) -> Self {
        Self {
            styles,
            heading_shift,
        }
    }

    /// Renders the document. Blocks are separated by `\n` inside one
    /// `<section>`; a document without blocks renders as an empty string.
    pub fn render(&self, markdown: &str) -> String {
        let doc = Document::new(markdown);
        let mut parts = Vec::new();
        for block in doc.blocks() {
            self.render_block(&block, &mut parts);
        }
        if parts.is_empty() {
            return String::new();
        }
        format!(
            r#"<section style="{}">{}</section>"#,
            self.styles.container,
            parts.join("\n")
        )
    }

    fn inline(&self, text: &str) -> String {
        process_inline(text, &HtmlInline::new(self.styles))
    }

    fn render_block(&self, block: &Block<'_>, out: &mut Vec<String>) {
        let s = self.styles;
        match block {
            Block::Blank => {}
            Block::Heading { level, text } => {
                let level = if self.heading_shift {
                    Heading::shift(*level)
                } else {
                    *level
                };
                out.push(format!(
                    r#"<h{level} style="{}">{}</h{level}>"#,
                    s.heading_style(level),
                    self.inline(text)
                ));
            }
            Block::FencedCode { lang, lines, .. } => {
                let lang_attr = lang
                    .map(|l| format!(r#" data-lang="{}""#, escape_html(l)))
                    .unwrap_or_default();
                out.push(format!(
                    r#"<pre{lang_attr} style="{}"><code style="{}">{}</code></pre>"#,
                    s.pre,
                    s.pre_code,
                    escape_html(&lines.join("\n"))
                ));
            }
            Block::Blockquote(lines) => {
                let inner: Vec<String> = lines.iter().map(|l| self.inline(l)).collect();
                out.push(format!(
                    r#"<blockquote style="{}">{}</blockquote>"#,
                    s.blockquote,
                    inner.join("<br>")
                ));
            }
            Block::UnorderedList(items) => {
                out.push(format!(r#"<ul style="{}">{}</ul>"#, s.ul, self.items(items)));
            }
            Block::OrderedList(items) => {
                out.push(format!(r#"<ol style="{}">{}</ol>"#, s.ol, self.items(items)));
            }
            Block::HorizontalRule => {
                out.push(format!(r#"<hr style="{}">"#, s.hr));
            }
            Block::Table(table) => self.table(table, out),
            Block::Paragraph(lines) => {
                let inner: Vec<String> = lines.iter().map(|l| self.inline(l)).collect();
                out.push(self.paragraph(&inner.join("<br>")));
            }
        }
    }

    fn paragraph(&self, html: &str) -> String {
        format!(r#"<p style="{}">{html}</p>"#, self.styles.paragraph)
    }

    fn items(&self, items: &[&str]) -> String {
        items
            .iter()
            .map(|item| format!(r#"<li style="{}">{}</li>"#, self.styles.li, self.inline(item)))
            .collect()
    }

    fn table(&self, table: &TableBlock<'_>, out: &mut Vec<String>) {
        let s = self.styles;
        let Some(parsed) = table.parse() else {
            log::debug!("table without separator row, rendering {} paragraphs", table.lines.len());
            out.extend(table.lines.iter().map(|l| self.paragraph(&self.inline(l))));
            return;
        };

        let cells = |row: &[&str], tag: &str, style: &str| -> String {
            row.iter()
                .map(|c| format!(r#"<{tag} style="{style}">{}</{tag}>"#, self.inline(c)))
                .collect()
        };
        let head = format!("<tr>{}</tr>", cells(&parsed.header, "th", &s.th));
        let body: String = parsed
            .rows
            .iter()
            .map(|row| format!("<tr>{}</tr>", cells(row, "td", &s.td)))
            .collect();
        out.push(format!(
            r#"<table style="{}"><thead>{head}</thead><tbody>{body}</tbody></table>"#,
            s.table
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;
    use rstest::rstest;

    fn render(md: &str) -> String {
        let themes = ThemeRegistry::builtin();
        WechatRenderer::new(&themes, &RenderOptions::default()).render(md)
    }

    fn render_unshifted(md: &str) -> String {
        let themes = ThemeRegistry::builtin();
        let options = RenderOptions {
            heading_shift: false,
            ..RenderOptions::default()
        };
        WechatRenderer::new(&themes, &options).render(md)
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    fn heading_levels(#[case] level: u8) {
        let md = format!("{} Title", "#".repeat(level as usize));
        let shifted = (level + 1).min(6);
        assert!(render(&md).contains(&format!("<h{shifted} style=")));
        assert!(render(&md).contains(&format!("Title</h{shifted}>")));
        assert!(render_unshifted(&md).contains(&format!("<h{level} style=")));
    }

    #[test]
    fn shifted_h1_uses_h2_style() {
        let styles = StyleBundle::default_theme();
        let html = render("# Hello");
        assert!(html.contains(&format!(r#"<h2 style="{}">Hello</h2>"#, styles.h2)));
    }

    #[test]
    fn whole_output_is_wrapped_in_one_section() {
        let styles = StyleBundle::default_theme();
        let html = render("one\n\ntwo");
        assert_eq!(
            html,
            format!(
                r#"<section style="{c}"><p style="{p}">one</p>
<p style="{p}">two</p></section>"#,
                c = styles.container,
                p = styles.paragraph
            )
        );
    }

    #[test]
    fn paragraph_lines_are_joined_with_br() {
        assert!(render("line one\nline two").contains(">line one<br>line two</p>"));
    }

    #[test]
    fn fenced_code_is_escaped_and_labelled() {
        let html = render("```html\n<script>alert(1)</script>\n```");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"<pre data-lang="html" style="#));
    }

    #[test]
    fn fence_language_is_escaped_in_attribute() {
        let html = render("```a\"b<c\nx\n```");
        assert!(html.contains(r#"<pre data-lang="a&quot;b&lt;c" style="#), "{html}");
    }

    #[test]
    fn fenced_code_without_lang_has_no_attribute() {
        let html = render("```\nx\n```");
        assert!(html.contains("<pre style="));
        assert!(!html.contains("data-lang"));
    }

    #[test]
    fn fenced_code_skips_inline_rules() {
        let html = render("```\n**not bold**\n```");
        assert!(html.contains("**not bold**"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn blockquote_lines_joined_with_br() {
        let html = render("> first\n> **second**");
        assert!(html.contains("<blockquote style=\"border-left"));
        assert!(html.contains(">first<br><strong>second</strong></blockquote>"));
    }

    #[test]
    fn lists_style_each_item() {
        let html = render("- Alpha\n- Beta");
        assert!(html.contains(r#"<ul style="padding-left:1.5em;margin:8px 0"><li style="margin:4px 0">Alpha</li><li style="margin:4px 0">Beta</li></ul>"#));
        let html = render("3. First\n9. Second");
        assert!(html.contains("<ol style="));
        assert!(html.contains(">First</li>"));
        assert!(!html.contains("3."));
    }

    #[test]
    fn horizontal_rule() {
        assert!(render("***").contains("<hr style="));
    }

    #[test]
    fn table_renders_header_and_body_cells() {
        let html = render("| Name | Age |\n|------|-----|\n| Ron  | 30  |");
        assert!(html.contains("<table style="));
        assert_eq!(html.matches("<th style=").count(), 2);
        assert_eq!(html.matches("<td style=").count(), 2);
        assert!(html.contains(">Name</th>"));
        assert!(html.contains(">Ron</td>"));
        assert!(html.contains(">30</td>"));
    }

    #[test]
    fn malformed_table_degrades_to_paragraphs() {
        let html = render("| a | b |\n| c | d |");
        assert!(!html.contains("<table"));
        assert_eq!(html.matches("<p style=").count(), 2);
        assert!(html.contains(">| a | b |</p>"));
    }

    #[test]
    fn unknown_theme_uses_default() {
        let themes = ThemeRegistry::builtin();
        let options = RenderOptions {
            theme: "missing".into(),
            ..RenderOptions::default()
        };
        let html = WechatRenderer::new(&themes, &options).render("text");
        assert_eq!(html, render("text"));
    }

    #[test]
    fn theme_changes_styles() {
        let themes = ThemeRegistry::builtin();
        let options = RenderOptions {
            theme: "tech".into(),
            ..RenderOptions::default()
        };
        let html = WechatRenderer::new(&themes, &options).render("## Section");
        assert!(html.contains(&StyleBundle::tech().h3));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n  \n"), "");
    }

    #[test]
    fn paragraph_text_is_not_escaped() {
        // Only code is escaped; literal markup in prose passes through.
        assert!(render("a <b>tag</b>").contains(">a <b>tag</b></p>"));
    }
}
