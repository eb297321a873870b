//! # Inline Kinds
//!
//! Inline-specific types that own their patterns and replacements. The
//! formatter compiles these; it never hardcodes `**` or `` ` ``.

pub mod bold;
pub mod code_span;
pub mod link;

pub use bold::Bold;
pub use code_span::CodeSpan;
pub use link::Link;
