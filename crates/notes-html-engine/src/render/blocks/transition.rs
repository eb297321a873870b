use super::types::{ParserState, TagKind};

/// What the flush controller does with a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add the line to the open accumulator.
    Append,
    /// Flush the open accumulator, then open a new one seeded with the line.
    Open,
    /// Flush the open accumulator; the line contributes nothing.
    Close,
    /// Flush the open accumulator, then emit the line as a single-line block.
    Emit,
}

/// The transition table, keyed by (current state, incoming tag).
///
/// Flushing `ParserState::None` is a no-op, so `Open`, `Close` and `Emit`
/// are uniform across states.
pub fn transition(state: ParserState, tag: TagKind) -> Action {
    use Action::*;
    use ParserState as S;
    use TagKind as T;

    match (state, tag) {
        // Only a fence ends a code block; every other line is content.
        (S::Code, T::Fence) => Close,
        (S::Code, _) => Append,
        (_, T::Fence) => Open,

        (S::Paragraph, T::Text) | (S::List, T::ListItem) | (S::Table, T::TableRow) => Append,

        // A table explicitly closes an open list. The reverse direction,
        // a list item after a table, is left to the generic row below.
        (S::List, T::TableRow) => Open,

        (_, T::Heading | T::BlockQuote | T::Rule) => Emit,
        (_, T::Blank) => Close,
        (_, T::Text | T::ListItem | T::TableRow | T::CodeLine) => Open,
    }
}
