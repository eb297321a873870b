/// Single-line blockquote prefix.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text when the line starts with `> ` at column zero.
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
