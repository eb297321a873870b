//! # Inline Formatting
//!
//! Three fixed-order substitution passes over already-escaped text:
//!
//! 1. **Bold**: `**text**` → `<strong>text</strong>`
//! 2. **Code span**: `` `text` `` → `<code>text</code>`
//! 3. **Link**: `[label](url)` → `<a href="url">label</a>`
//!
//! The order matters: running bold first keeps the `*` markers from being
//! seen by the later passes, and a later pattern never straddles a span an
//! earlier pass already replaced.
//!
//! Inline formatting never runs inside fenced code blocks.

pub mod formatter;
pub mod kinds;

pub use formatter::{format_inline, render_inline};
