/// `[label](url)` links.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\]]+)\]\(([^)]+)\)";

    /// Schemes that execute or embed content when followed.
    pub const UNSAFE_SCHEMES: [&'static str; 3] = ["javascript:", "vbscript:", "data:"];

    /// Renders an anchor from an already-escaped label and target.
    ///
    /// A target with an unsafe scheme renders the label alone.
    pub fn render(label: &str, href: &str) -> String {
        if Self::is_unsafe(href) {
            return label.to_string();
        }
        format!(r#"<a href="{}">{label}</a>"#, href.trim())
    }

    /// Browsers ignore whitespace and control characters inside a scheme,
    /// so they are dropped before comparing.
    pub fn is_unsafe(href: &str) -> bool {
        let compact: String = href
            .chars()
            .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
            .take(16)
            .collect::<String>()
            .to_ascii_lowercase();
        Self::UNSAFE_SCHEMES
            .iter()
            .any(|scheme| compact.starts_with(scheme))
    }
}
