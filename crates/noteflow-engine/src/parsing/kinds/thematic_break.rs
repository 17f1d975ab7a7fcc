/// Horizontal rule: three or more `-`, or three or more `*`, and nothing else
/// once surrounding whitespace is trimmed.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 2] = ['-', '*'];

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 3
            && Self::MARKERS
                .iter()
                .any(|&marker| t.chars().all(|c| c == marker))
    }
}
