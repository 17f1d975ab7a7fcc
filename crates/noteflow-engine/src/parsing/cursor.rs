/// A forward-only cursor over the lines of a document.
///
/// The segmenter never looks further ahead than [`LineCursor::peek_next`];
/// the index only ever grows.
#[derive(Clone)]
pub struct LineCursor<'d, 'a> {
    /// The lines being segmented.
    pub lines: &'d [&'a str],
    /// Index of the current line.
    pub i: usize,
}

impl<'d, 'a> LineCursor<'d, 'a> {
    /// Creates a new cursor at the first line.
    pub fn new(lines: &'d [&'a str]) -> Self {
        Self { lines, i: 0 }
    }

    /// Returns the index of the current line.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true once every line has been consumed.
    pub fn eof(&self) -> bool {
        self.i >= self.lines.len()
    }

    /// Peeks at the current line without advancing.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.i).copied()
    }

    /// Peeks at the line after the current one.
    pub fn peek_next(&self) -> Option<&'a str> {
        self.lines.get(self.i + 1).copied()
    }

    /// Advances by one line, returning the consumed line.
    pub fn bump(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.i += 1;
        Some(line)
    }

    /// Consumes lines for as long as `pred` accepts them.
    pub fn bump_while(&mut self, mut pred: impl FnMut(&str) -> bool) -> Vec<&'a str> {
        let mut out = Vec::new();
        while let Some(line) = self.peek() {
            if !pred(line) {
                break;
            }
            out.push(line);
            self.i += 1;
        }
        out
    }
}
