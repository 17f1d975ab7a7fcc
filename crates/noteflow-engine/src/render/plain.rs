//! Xiaohongshu plain text.
//!
//! No markup survives: structure is carried by bracket and emoji markers, bold
//! text by emphasis brackets, and paragraphs are soft-wrapped.

use crate::{
    document::Document,
    inline::{PlainInline, process_inline},
    options::{HeadingStyle, RenderOptions},
    parsing::{Block, TableBlock, kinds::Table},
};

use super::wrap::{collapse_blank_lines, soft_wrap};

const QUOTE_OPEN: &str = "❝";
const QUOTE_CLOSE: &str = "❞";
const BULLET: &str = "• ";
const CODE_END: &str = "▌ end ▌";
const RULE_CHAR: &str = "—";
const RULE_WIDTH: usize = 20;

/// Renders Markdown as stylized plain text.
pub struct XhsRenderer<'o> {
    options: &'o RenderOptions,
    inline: PlainInline,
}

impl<'o> XhsRenderer<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self {
            options,
            inline: PlainInline::new(options.emphasis_style),
        }
    }

    /// Renders the document, collapses blank-line runs and trims the result.
    pub fn render(&self, markdown: &str) -> String {
        let doc = Document::new(markdown);
        let mut out: Vec<String> = Vec::new();
        for block in doc.blocks() {
            self.render_block(&block, &mut out);
        }
        collapse_blank_lines(&out.join("\n")).trim().to_string()
    }

    fn inline(&self, text: &str) -> String {
        process_inline(text, &self.inline)
    }

    fn heading(&self, level: u8, text: &str) -> String {
        match (level, self.options.heading_style) {
            (1, HeadingStyle::Brackets) => format!("【{text}】"),
            (1, HeadingStyle::Emoji) => format!("✨ {text} ✨"),
            (2, HeadingStyle::Brackets) => format!("▎{text}"),
            (2, HeadingStyle::Emoji) => format!("✅ {text}"),
            _ => format!("· {text}"),
        }
    }

    fn render_block(&self, block: &Block<'_>, out: &mut Vec<String>) {
        match block {
            Block::Blank => out.push(String::new()),
            Block::Heading { level, text } => {
                out.push(String::new());
                out.push(self.heading(*level, &self.inline(text)));
                out.push(String::new());
            }
            Block::FencedCode { lang, lines, .. } => {
                out.push(format!("▌ {} ▌", lang.unwrap_or("code")));
                out.extend(lines.iter().map(|l| l.to_string()));
                out.push(CODE_END.to_string());
            }
            Block::Blockquote(lines) => {
                out.push(QUOTE_OPEN.to_string());
                out.extend(lines.iter().map(|l| self.inline(l)));
                out.push(QUOTE_CLOSE.to_string());
            }
            Block::UnorderedList(items) => {
                out.extend(items.iter().map(|item| format!("{BULLET}{}", self.inline(item))));
            }
            Block::OrderedList(items) => {
                out.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(n, item)| format!("{}. {}", n + 1, self.inline(item))),
                );
            }
            Block::HorizontalRule => out.push(RULE_CHAR.repeat(RULE_WIDTH)),
            Block::Table(table) => self.table(table, out),
            Block::Paragraph(lines) => {
                let text: Vec<String> = lines.iter().map(|l| self.inline(l)).collect();
                out.push(soft_wrap(&text.join(" "), self.options.max_line_length));
            }
        }
    }

    /// One line per row, cells joined by ` | `. Separator rows and empty
    /// cells are dropped; a missing separator changes nothing.
    fn table(&self, table: &TableBlock<'_>, out: &mut Vec<String>) {
        for row in table.lines.iter().filter(|row| !Table::is_separator(row)) {
            let cells: Vec<String> = Table::split_row(row)
                .into_iter()
                .filter(|cell| !cell.is_empty())
                .map(|cell| self.inline(cell))
                .collect();
            out.push(cells.join(" | "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EmphasisStyle;
    use pretty_assertions::assert_eq;

    fn render(md: &str) -> String {
        XhsRenderer::new(&RenderOptions::default()).render(md)
    }

    fn render_with(md: &str, options: RenderOptions) -> String {
        XhsRenderer::new(&options).render(md)
    }

    #[test]
    fn bracket_headings() {
        assert_eq!(render("# My Title"), "【My Title】");
        assert_eq!(render("## Section"), "▎Section");
        assert_eq!(render("### Subsection"), "· Subsection");
        assert_eq!(render("###### Deep"), "· Deep");
    }

    #[test]
    fn emoji_headings() {
        let options = RenderOptions {
            heading_style: HeadingStyle::Emoji,
            ..RenderOptions::default()
        };
        assert_eq!(render_with("# Title", options.clone()), "✨ Title ✨");
        assert_eq!(render_with("## Sec", options.clone()), "✅ Sec");
        assert_eq!(render_with("#### Low", options), "· Low");
    }

    #[test]
    fn headings_get_blank_lines_around_them() {
        assert_eq!(render("intro\n# Title\nbody"), "intro\n\n【Title】\n\nbody");
    }

    #[test]
    fn heading_text_goes_through_inline_rules() {
        assert_eq!(render("# **Bold Title**"), "【「Bold Title」】");
    }

    #[test]
    fn emphasis_styles() {
        assert_eq!(render("**important**"), "「important」");
        let options = RenderOptions {
            emphasis_style: EmphasisStyle::Lenticular,
            ..RenderOptions::default()
        };
        assert_eq!(render_with("**important**", options), "【important】");
    }

    #[test]
    fn lists_are_bulleted_and_renumbered() {
        assert_eq!(render("- Apple\n* Banana"), "• Apple\n• Banana");
        assert_eq!(render("5. First\n9. Second"), "1. First\n2. Second");
    }

    #[test]
    fn blockquote_markers() {
        assert_eq!(render("> some *quote*\n> more"), "❝\nsome quote\nmore\n❞");
    }

    #[test]
    fn code_fence_is_raw() {
        assert_eq!(
            render("```python\nprint('**hi**')\n```"),
            "▌ python ▌\nprint('**hi**')\n▌ end ▌"
        );
        assert_eq!(render("```\nx"), "▌ code ▌\nx\n▌ end ▌");
    }

    #[test]
    fn horizontal_rule_is_a_dash_line() {
        assert_eq!(render("---"), "—".repeat(20));
    }

    #[test]
    fn table_degrades_to_pipe_lines() {
        let text = render("| Name | Age |\n|------|-----|\n| Ron  | 30  |");
        assert_eq!(text, "Name | Age\nRon | 30");
        assert!(!text.contains("<table"));
    }

    #[test]
    fn table_without_separator_keeps_every_row() {
        assert_eq!(render("| a | b |\n| c | |"), "a | b\nc");
    }

    #[test]
    fn paragraph_lines_join_with_spaces() {
        assert_eq!(render("one\ntwo"), "one two");
    }

    #[test]
    fn long_paragraph_wraps() {
        let long = "word ".repeat(20).trim().to_string();
        let options = RenderOptions {
            max_line_length: 30,
            ..RenderOptions::default()
        };
        let text = render_with(&long, options);
        assert!(text.lines().count() > 1);
        assert!(text.lines().all(|l| l.len() <= 30));
    }

    #[test]
    fn list_items_are_not_wrapped() {
        let item = format!("- {}", "word ".repeat(30).trim());
        let options = RenderOptions {
            max_line_length: 10,
            ..RenderOptions::default()
        };
        assert_eq!(render_with(&item, options).lines().count(), 1);
    }

    #[test]
    fn blank_runs_collapse() {
        assert_eq!(render("Para 1\n\n\n\n\nPara 2"), "Para 1\n\nPara 2");
    }

    #[test]
    fn empty_input() {
        assert_eq!(render(""), "");
    }
}
