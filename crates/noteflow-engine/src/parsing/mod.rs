//! # Block Segmentation
//!
//! Line-oriented segmentation of a document into [`Block`]s.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): the line under the cursor is
//!    classified by trying block matchers in a fixed priority order. Only the
//!    table matcher looks one line ahead.
//!
//! 2. **Block Construction** (`Segmenter`): the opener decides how many lines
//!    the block consumes and the cursor moves past them.
//!
//! ## Modules
//!
//! - **`cursor`**: `LineCursor`, a forward-only cursor with one line of lookahead
//! - **`kinds`**: per-kind delimiters and line matchers
//! - **`classify`**: `classify` produces a `LineKind` for the current line
//! - **`types`**: `Block`, `TableBlock`, `ParsedTable`
//!
//! ## Key Invariants
//!
//! - Every call to `Segmenter::next` consumes at least one line
//! - Fenced code is a raw zone: content lines are never classified
//! - Paragraphs end at the first line that would open any other block

pub mod classify;
pub mod cursor;
pub mod kinds;
pub mod types;

pub use classify::{LineKind, classify};
pub use cursor::LineCursor;
pub use types::{Block, ParsedTable, TableBlock};

use kinds::{BlockQuote, BulletItem, CodeFence, Heading, OrderedItem, Table};

/// Iterator over the blocks of a line slice.
pub struct Segmenter<'d, 'a> {
    cur: LineCursor<'d, 'a>,
}

impl<'d, 'a> Segmenter<'d, 'a> {
    pub fn new(lines: &'d [&'a str]) -> Self {
        Self {
            cur: LineCursor::new(lines),
        }
    }

    fn fenced_code(&mut self) -> Block<'a> {
        let open = self.cur.bump().unwrap_or_default();
        let lines = self.cur.bump_while(|l| !CodeFence::is_fence(l));
        let closed = self.cur.bump().is_some();
        if !closed {
            log::debug!("unterminated code fence runs to end of input");
        }
        Block::FencedCode {
            lang: CodeFence::lang(open),
            lines,
            closed,
        }
    }

    fn heading(&mut self) -> Block<'a> {
        let line = self.cur.bump().unwrap_or_default();
        match Heading::parse(line) {
            Some((level, text)) => Block::Heading { level, text },
            None => Block::Paragraph(vec![line]),
        }
    }

    fn table(&mut self) -> Block<'a> {
        // The first line is always taken, even when the table was triggered by
        // the separator on the next line. That separator comes along too,
        // with or without a leading pipe.
        let header = self.cur.bump();
        let mut lines: Vec<&'a str> = header.into_iter().collect();
        if header.is_some_and(|line| !Table::is_row(line)) {
            lines.extend(self.cur.bump());
        }
        lines.extend(self.cur.bump_while(Table::is_row));
        Block::Table(TableBlock { lines })
    }

    fn paragraph(&mut self) -> Block<'a> {
        let mut lines: Vec<&'a str> = self.cur.bump().into_iter().collect();
        while classify(&self.cur) == Some(LineKind::Paragraph) {
            lines.extend(self.cur.bump());
        }
        Block::Paragraph(lines)
    }
}

impl<'a> Iterator for Segmenter<'_, 'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        let start = self.cur.pos();
        let block = match classify(&self.cur)? {
            LineKind::Blank => {
                self.cur.bump();
                Block::Blank
            }
            LineKind::FenceOpen => self.fenced_code(),
            LineKind::Heading => self.heading(),
            LineKind::BlockQuote => Block::Blockquote(
                self.cur
                    .bump_while(BlockQuote::matches)
                    .into_iter()
                    .map(BlockQuote::strip_prefix)
                    .collect(),
            ),
            LineKind::BulletItem => Block::UnorderedList(
                self.cur
                    .bump_while(BulletItem::matches)
                    .into_iter()
                    .filter_map(BulletItem::strip)
                    .collect(),
            ),
            LineKind::OrderedItem => Block::OrderedList(
                self.cur
                    .bump_while(OrderedItem::matches)
                    .into_iter()
                    .filter_map(OrderedItem::strip)
                    .collect(),
            ),
            LineKind::ThematicBreak => {
                self.cur.bump();
                Block::HorizontalRule
            }
            LineKind::TableRow => self.table(),
            LineKind::Paragraph => self.paragraph(),
        };
        debug_assert!(self.cur.pos() > start, "segmenter must consume input");
        Some(block)
    }
}
