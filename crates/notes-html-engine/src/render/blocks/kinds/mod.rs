//! # Block Kinds
//!
//! Each block kind owns its syntax markers. The classifier asks these types
//! whether a line matches; it never hardcodes `#`, `|` or a fence itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod rule;
pub mod table_row;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use rule::Rule;
pub use table_row::TableRow;
