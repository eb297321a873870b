/// `**bold**` spans.
pub struct Bold;

impl Bold {
    pub const PATTERN: &'static str = r"\*\*(.+?)\*\*";
    pub const REPLACEMENT: &'static str = "<strong>${1}</strong>";
}
