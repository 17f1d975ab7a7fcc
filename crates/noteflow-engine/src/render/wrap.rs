use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank run regex"));

/// Length as the target editors count it: UTF-16 code units.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Greedy word packing on single spaces.
///
/// A word is moved to a new line when appending it would push the current
/// line past `max_len`. Words longer than `max_len` are never split. A
/// `max_len` of 0 disables wrapping.
pub fn soft_wrap(text: &str, max_len: usize) -> String {
    if max_len == 0 || text_len(text) <= max_len {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        let sep = if current.is_empty() { 0 } else { 1 };
        if !current.is_empty() && text_len(&current) + sep + text_len(word) > max_len {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Collapses every run of three or more newlines to a single blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(soft_wrap("Short line", 60), "Short line");
    }

    #[test]
    fn zero_disables_wrapping() {
        let long = "word ".repeat(20).trim().to_string();
        assert_eq!(soft_wrap(&long, 0), long);
    }

    #[test]
    fn wraps_greedily() {
        assert_eq!(
            soft_wrap("aaa bbb ccc ddd", 7),
            "aaa bbb\nccc ddd"
        );
    }

    #[test]
    fn long_words_are_not_split() {
        assert_eq!(
            soft_wrap("a supercalifragilistic b", 5),
            "a\nsupercalifragilistic\nb"
        );
    }

    #[test]
    fn wrapped_lines_respect_limit() {
        let long = "word ".repeat(20).trim().to_string();
        for line in soft_wrap(&long, 30).lines() {
            assert!(text_len(line) <= 30, "{line:?}");
        }
    }

    #[test]
    fn counts_cjk_as_single_units() {
        // Four CJK characters and a space are five units wide.
        assert_eq!(soft_wrap("你好 世界", 6), "你好 世界");
        assert_eq!(soft_wrap("你好 世界", 4), "你好\n世界");
    }

    #[test]
    fn collapse_keeps_single_blank_line() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    }
}
