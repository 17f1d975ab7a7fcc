use super::{
    cursor::LineCursor,
    kinds::{BlockQuote, BulletItem, CodeFence, Heading, OrderedItem, Table, ThematicBreak},
};

/// What the line under the cursor opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    FenceOpen,
    Heading,
    BlockQuote,
    BulletItem,
    OrderedItem,
    ThematicBreak,
    TableRow,
    Paragraph,
}

/// Classifies the current line, trying matchers in priority order.
///
/// Only the table matcher looks at the following line. Returns `None` at end
/// of input.
pub fn classify(cur: &LineCursor<'_, '_>) -> Option<LineKind> {
    let line = cur.peek()?;
    let kind = if line.trim().is_empty() {
        LineKind::Blank
    } else if CodeFence::is_fence(line) {
        LineKind::FenceOpen
    } else if Heading::parse(line).is_some() {
        LineKind::Heading
    } else if BlockQuote::matches(line) {
        LineKind::BlockQuote
    } else if BulletItem::matches(line) {
        LineKind::BulletItem
    } else if OrderedItem::matches(line) {
        LineKind::OrderedItem
    } else if ThematicBreak::matches(line) {
        LineKind::ThematicBreak
    } else if Table::is_row(line) || cur.peek_next().is_some_and(Table::is_lookahead_separator)
    {
        LineKind::TableRow
    } else {
        LineKind::Paragraph
    };
    Some(kind)
}
