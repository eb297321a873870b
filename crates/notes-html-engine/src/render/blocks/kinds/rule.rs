/// Horizontal rule: three or more dashes and nothing else.
pub struct Rule;

impl Rule {
    pub const DASH: char = '-';
    pub const MIN_DASHES: usize = 3;

    pub fn sig(line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.len() >= Self::MIN_DASHES && trimmed.chars().all(|c| c == Self::DASH)
    }
}
