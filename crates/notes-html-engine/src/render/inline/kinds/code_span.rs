/// Single-backtick code spans.
///
/// A literal backtick inside a span cannot be expressed.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: char = '`';
    pub const PATTERN: &'static str = r"`(.+?)`";
    pub const REPLACEMENT: &'static str = "<code>${1}</code>";
}
