use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::flavor::InlineFlavor;

macro_rules! rule {
    ($re:literal) => {
        LazyLock::new(|| Regex::new($re).expect(concat!("valid inline rule: ", $re)))
    };
}

static CODE_SPAN: LazyLock<Regex> = rule!(r"`([^`]+)`");
static BOLD_ITALIC: LazyLock<Regex> = rule!(r"\*{3}(.+?)\*{3}");
static BOLD_STARS: LazyLock<Regex> = rule!(r"\*{2}(.+?)\*{2}");
static BOLD_UNDERSCORES: LazyLock<Regex> = rule!(r"_{2}(.+?)_{2}");
static ITALIC_STAR: LazyLock<Regex> = rule!(r"\*(.+?)\*");
static ITALIC_UNDERSCORE: LazyLock<Regex> = rule!(r"_(.+?)_");
static STRIKETHROUGH: LazyLock<Regex> = rule!(r"~~(.+?)~~");
static WIKI_LINK: LazyLock<Regex> = rule!(r"\[\[([^\]|]+)(?:\|([^\]]+))?\]\]");
static IMAGE: LazyLock<Regex> = rule!(r"!\[([^\]]*)\]\([^)]*\)");
static LINK: LazyLock<Regex> = rule!(r"\[([^\]]+)\]\([^)]*\)");

/// Replaces every match of `re` in `text` with the output of `f`.
fn substitute(text: &str, re: &Regex, f: impl Fn(&Captures<'_>) -> String) -> String {
    re.replace_all(text, |caps: &Captures<'_>| f(caps)).into_owned()
}

/// Runs the eight inline rules over `text`, in order, rendering each match
/// with `flavor`.
pub fn process_inline<F: InlineFlavor + ?Sized>(text: &str, flavor: &F) -> String {
    let mut out = substitute(text, &CODE_SPAN, |c| flavor.code_span(&c[1]));
    out = substitute(&out, &BOLD_ITALIC, |c| flavor.bold_italic(&c[1]));
    out = substitute(&out, &BOLD_STARS, |c| flavor.bold(&c[1]));
    out = substitute(&out, &BOLD_UNDERSCORES, |c| flavor.bold(&c[1]));
    out = substitute(&out, &ITALIC_STAR, |c| flavor.italic(&c[1]));
    out = substitute(&out, &ITALIC_UNDERSCORE, |c| flavor.italic(&c[1]));
    out = substitute(&out, &STRIKETHROUGH, |c| flavor.strikethrough(&c[1]));
    out = substitute(&out, &WIKI_LINK, |c| {
        let label = c.get(2).or_else(|| c.get(1)).map_or("", |m| m.as_str());
        flavor.wiki_link(label)
    });
    out = substitute(&out, &IMAGE, |c| flavor.image(&c[1]));
    substitute(&out, &LINK, |c| flavor.link(&c[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::{HtmlInline, PlainInline};
    use crate::options::EmphasisStyle;
    use crate::theme::StyleBundle;
    use rstest::rstest;

    fn html(text: &str) -> String {
        let styles = StyleBundle::default_theme();
        process_inline(text, &HtmlInline::new(&styles))
    }

    fn plain(text: &str) -> String {
        process_inline(text, &PlainInline::new(EmphasisStyle::Corner))
    }

    #[rstest]
    #[case("**bold text**", "<strong>bold text</strong>")]
    #[case("__bold__", "<strong>bold</strong>")]
    #[case("***both***", "<strong><em>both</em></strong>")]
    #[case("*italic*", "<em>italic</em>")]
    #[case("_italic_", "<em>italic</em>")]
    #[case("~~removed~~", "<del>removed</del>")]
    #[case("See [[My Note]]", "See My Note")]
    #[case("See [[My Note|Click here]]", "See Click here")]
    #[case("![sunset](img/sunset.png)", "<em>[Image: sunset]</em>")]
    #[case("![](img/sunset.png)", "<em>[Image: 图片]</em>")]
    #[case("[docs](https://example.com)", "docs")]
    #[case("plain <b>kept</b>", "plain <b>kept</b>")]
    fn html_rules(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(html(input), expected);
    }

    #[rstest]
    #[case("**important**", "「important」")]
    #[case("***both***", "「both」")]
    #[case("*italic text*", "italic text")]
    #[case("~~gone~~", "gone")]
    #[case("`a < b`", "a < b")]
    #[case("[[Target|Alias]]", "Alias")]
    #[case("![sunset](img/a.png)", "[图片: sunset]")]
    #[case("![](img/a.png)", "[图片: 图片]")]
    #[case("[text](url)", "text")]
    fn plain_rules(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(plain(input), expected);
    }

    #[test]
    fn code_span_content_is_escaped() {
        let out = html("Run `a<b && c` now");
        assert!(out.contains(">a&lt;b &amp;&amp; c</code>"), "{out}");
        assert!(out.starts_with("Run <code style=\""));
        assert!(out.ends_with("</code> now"));
    }

    #[test]
    fn wiki_label_is_escaped_in_html() {
        assert_eq!(html("[[A<B]]"), "A&lt;B");
    }

    #[test]
    fn image_is_not_treated_as_link() {
        // Without the image rule running first, the link rule would leave a
        // stray `!` in front of the alt text.
        assert_eq!(plain("![alt](x.png)"), "[图片: alt]");
    }

    #[test]
    fn lenticular_emphasis() {
        let out = process_inline("**x**", &PlainInline::new(EmphasisStyle::Lenticular));
        assert_eq!(out, "【x】");
    }

    #[test]
    fn unmatched_delimiters_are_left_alone() {
        assert_eq!(html("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(plain("`unclosed"), "`unclosed");
    }
}
