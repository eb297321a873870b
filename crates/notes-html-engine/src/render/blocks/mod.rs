//! # Block Parsing
//!
//! A single pass over the document, one line at a time, as an explicit
//! finite state machine.
//!
//! ## Phases per line
//!
//! 1. **Line Classification** (`classify`): the line plus the current
//!    `ParserState` map to a `LineTag`, first match wins.
//! 2. **Transition** (`transition`): `(ParserState, TagKind)` maps to an
//!    `Action` saying whether to append, flush-and-open, flush, or
//!    flush-and-emit.
//! 3. **Accumulation** (`builder`): `BlockBuilder` applies the action to its
//!    single open accumulator and collects flushed `Block`s.
//!
//! ## Modules
//!
//! - **`types`**: `ParserState`, `LineTag`, `TagKind`, `Block`
//! - **`kinds`**: marker types owning each construct's syntax
//! - **`classify`**: the pure line classifier
//! - **`transition`**: the transition table
//! - **`builder`**: accumulators and flush controller
//!
//! ## Key Invariants
//!
//! - At most one accumulator is open at a time
//! - Fenced code blocks are raw zones: no other block rule applies inside
//! - Separator rows never reach a `Block::Table`
//! - Block text is stored raw; escaping is left to emission

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod transition;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::classify;
pub use transition::{Action, transition};
pub use types::{Block, LineTag, ParserState, TagKind};
