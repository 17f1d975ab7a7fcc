/// Fenced code block type with owned delimiter constant.
///
/// Fenced code is a raw zone: nothing between the fences is classified or
/// passed through inline substitution.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the line opens or closes a fence.
    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// The language label after the opening fence, if any.
    pub fn lang(open: &str) -> Option<&str> {
        let label = open.strip_prefix(Self::BACKTICKS)?.trim();
        (!label.is_empty()).then_some(label)
    }
}
