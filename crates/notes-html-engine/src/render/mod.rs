//! # Markdown to HTML
//!
//! Renders research-note and report bodies to a sanitized HTML fragment.
//! This is the only injection boundary: whatever hosts the fragment inserts
//! it as-is, so every piece of input text is escaped before any tag is
//! wrapped around it.
//!
//! ## Pipeline
//!
//! document → lines → `blocks` (classify, accumulate, flush) → `html`
//! (escape, `inline` formatting) → fragment
//!
//! ## Entry points
//!
//! - [`render`]: unbounded, infallible
//! - [`parse_blocks`]: block structure only, text left raw
//! - [`MarkdownTranscoder`]: checks [`RenderLimits`] before rendering
//!
//! Every call builds its own state; nothing is shared between calls.

pub mod blocks;
pub mod html;
pub mod inline;

#[cfg(test)]
mod tests;

pub use blocks::{Block, BlockBuilder, ParserState};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Input is {bytes} bytes, limit is {limit}")]
    InputTooLarge { bytes: usize, limit: usize },
    #[error("Input has more than {limit} lines")]
    TooManyLines { limit: usize },
}

/// Ceilings that bound worst-case rendering time on pathological input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    pub max_bytes: usize,
    pub max_lines: usize,
}

impl RenderLimits {
    pub const DEFAULT_MAX_BYTES: usize = 1024 * 1024;
    pub const DEFAULT_MAX_LINES: usize = 20_000;

    pub fn unbounded() -> Self {
        Self {
            max_bytes: usize::MAX,
            max_lines: usize::MAX,
        }
    }

    pub fn check(&self, input: &str) -> Result<(), RenderError> {
        if input.len() > self.max_bytes {
            return Err(RenderError::InputTooLarge {
                bytes: input.len(),
                limit: self.max_bytes,
            });
        }
        // Stop counting as soon as the ceiling is crossed
        let counted = input.lines().take(self.max_lines.saturating_add(1)).count();
        if counted > self.max_lines {
            return Err(RenderError::TooManyLines {
                limit: self.max_lines,
            });
        }
        Ok(())
    }
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
            max_lines: Self::DEFAULT_MAX_LINES,
        }
    }
}

/// Bounded entry point.
#[derive(Debug, Clone, Default)]
pub struct MarkdownTranscoder {
    limits: RenderLimits,
}

impl MarkdownTranscoder {
    pub fn new(limits: RenderLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> RenderLimits {
        self.limits
    }

    pub fn render(&self, input: &str) -> Result<String, RenderError> {
        self.limits.check(input)?;
        Ok(render(input))
    }
}

/// Runs block parsing only. Block text is raw, not escaped.
pub fn parse_blocks(input: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for line in input.lines() {
        builder.push(line);
    }
    builder.finish()
}

/// Renders a whole document to an HTML fragment.
pub fn render(input: &str) -> String {
    let blocks = parse_blocks(input);
    log::debug!(
        "rendered {} blocks from {} bytes of markdown",
        blocks.len(),
        input.len()
    );
    html::render_blocks(&blocks)
}
