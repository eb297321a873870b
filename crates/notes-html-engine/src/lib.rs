pub mod io;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use render::{
    Block, MarkdownTranscoder, RenderError, RenderLimits, parse_blocks, render,
};
