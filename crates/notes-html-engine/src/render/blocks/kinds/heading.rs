/// ATX heading prefixes, levels 1 to 3.
pub struct Heading;

impl Heading {
    /// Longest prefix first so `## ` is never read as `# `.
    pub const PREFIXES: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns `(level, text)` when `line` starts with a heading prefix.
    ///
    /// The prefix must be at column zero; `#### ` and deeper are not headings.
    pub fn sig(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| {
                line.strip_prefix(*prefix).map(|rest| (*level, rest.trim()))
            })
    }
}
