/// Fenced code block delimiter knowledge.
///
/// A fence line both opens and closes a code block; the text after the
/// opening marker is the language token.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the (trimmed, possibly empty) language token if `line` is a fence.
    ///
    /// Leading whitespace is ignored, and any extra backticks beyond the
    /// marker belong to the fence rather than the language token.
    pub fn sig(line: &str) -> Option<&str> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;
        Some(rest.trim_start_matches('`').trim())
    }

    /// Language token as stored on a code block; empty means none.
    pub fn lang(token: &str) -> Option<String> {
        (!token.is_empty()).then(|| token.to_string())
    }
}
