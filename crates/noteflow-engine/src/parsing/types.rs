use super::kinds::Table;

/// A structural unit of the document, borrowing its lines from the source.
///
/// Each block covers a contiguous, non-overlapping run of input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// ATX heading with its unshifted level (1 to 6).
    Heading { level: u8, text: &'a str },
    /// A fenced code block. Content lines are raw.
    FencedCode {
        lang: Option<&'a str>,
        lines: Vec<&'a str>,
        /// False when the fence ran to end of input without a closing line.
        closed: bool,
    },
    /// Blockquote lines with the `>` prefix stripped.
    Blockquote(Vec<&'a str>),
    /// Unordered list item texts with markers stripped.
    UnorderedList(Vec<&'a str>),
    /// Ordered list item texts with numerals stripped.
    OrderedList(Vec<&'a str>),
    HorizontalRule,
    Table(TableBlock<'a>),
    /// Raw paragraph lines, not yet joined.
    Paragraph(Vec<&'a str>),
    Blank,
}

/// The raw rows of a pipe table, header first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock<'a> {
    pub lines: Vec<&'a str>,
}

/// A table that passed the well-formedness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable<'a> {
    pub header: Vec<&'a str>,
    pub rows: Vec<Vec<&'a str>>,
}

impl<'a> TableBlock<'a> {
    /// Splits the rows into cells when the second line is a separator row.
    ///
    /// Returns `None` for malformed tables so the caller can degrade.
    pub fn parse(&self) -> Option<ParsedTable<'a>> {
        let [header, separator, body @ ..] = self.lines.as_slice() else {
            return None;
        };
        if !Table::is_separator(separator) {
            return None;
        }
        Some(ParsedTable {
            header: Table::split_row(header),
            rows: body.iter().map(|row| Table::split_row(row)).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_table() {
        let table = TableBlock {
            lines: vec!["| Name | Age |", "|------|-----|", "| Ron  | 30  |"],
        };
        let parsed = table.parse().unwrap();
        assert_eq!(parsed.header, vec!["Name", "Age"]);
        assert_eq!(parsed.rows, vec![vec!["Ron", "30"]]);
    }

    #[test]
    fn header_only_is_malformed() {
        let table = TableBlock {
            lines: vec!["| Name | Age |"],
        };
        assert!(table.parse().is_none());
    }

    #[test]
    fn missing_separator_is_malformed() {
        let table = TableBlock {
            lines: vec!["| a | b |", "| c | d |"],
        };
        assert!(table.parse().is_none());
    }

    #[test]
    fn header_and_separator_without_body() {
        let table = TableBlock {
            lines: vec!["| a |", "|---|"],
        };
        let parsed = table.parse().unwrap();
        assert_eq!(parsed.header, vec!["a"]);
        assert!(parsed.rows.is_empty());
    }
}
