/// Bullet list item markers.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Returns the item text when the trimmed line starts with a bullet marker.
    pub fn sig(line: &str) -> Option<&str> {
        let trimmed = line.trim();
        Self::MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(*marker))
            .map(str::trim)
    }
}
