use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::kinds::{Bold, CodeSpan, Link};
use crate::render::html::escape;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Bold::PATTERN).expect("bold pattern is valid"));
static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CodeSpan::PATTERN).expect("code span pattern is valid"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Link::PATTERN).expect("link pattern is valid"));

/// Applies bold, then inline code, then link substitution.
///
/// `escaped` must already be HTML-escaped: the passes wrap tags around
/// fragments but never escape anything themselves. Nested or overlapping
/// constructs are not supported.
pub fn format_inline(escaped: &str) -> String {
    let bolded = BOLD.replace_all(escaped, Bold::REPLACEMENT);
    let coded = CODE_SPAN.replace_all(&bolded, CodeSpan::REPLACEMENT);
    LINK.replace_all(&coded, |caps: &Captures<'_>| Link::render(&caps[1], &caps[2]))
        .into_owned()
}

/// Escapes raw text, then formats it.
pub fn render_inline(raw: &str) -> String {
    format_inline(&escape(raw))
}
