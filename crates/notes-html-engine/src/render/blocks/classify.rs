use super::{
    kinds::{BlockQuote, CodeFence, Heading, ListItem, Rule, TableRow},
    types::{LineTag, ParserState},
};

/// Classifies one line given the state of the open accumulator.
///
/// First match wins, in this order: fence, raw code line (only while a
/// fence is open), heading, table row, list item, blockquote, horizontal
/// rule, blank, text.
pub fn classify(state: ParserState, line: &str) -> LineTag<'_> {
    // Fences are checked even inside a code block: that is how it closes.
    if let Some(lang) = CodeFence::sig(line) {
        return LineTag::Fence { lang };
    }
    if state == ParserState::Code {
        return LineTag::CodeLine(line);
    }
    if let Some((level, text)) = Heading::sig(line) {
        return LineTag::Heading { level, text };
    }
    if let Some(row) = TableRow::sig(line) {
        return LineTag::TableRow(row);
    }
    if let Some(item) = ListItem::sig(line) {
        return LineTag::ListItem(item);
    }
    if let Some(text) = BlockQuote::sig(line) {
        return LineTag::BlockQuote(text);
    }
    if Rule::sig(line) {
        return LineTag::Rule;
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineTag::Blank;
    }
    LineTag::Text(trimmed)
}
