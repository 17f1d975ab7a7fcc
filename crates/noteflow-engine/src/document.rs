use std::borrow::Cow;

use crate::parsing::Segmenter;

/// A Markdown source split into lines.
///
/// Lines borrow from the original text. A single trailing `\r` is dropped
/// from each line so `\r\n` input classifies exactly like `\n` input.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Segments the document into blocks, first match wins per line.
    pub fn blocks(&self) -> Segmenter<'_, 'a> {
        Segmenter::new(&self.lines)
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
