/// Which accumulator is currently open.
///
/// Exactly one value holds at any point in a parse; `None` means nothing is
/// buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    None,
    Paragraph,
    List,
    Table,
    Code,
}

/// Classification of one input line.
///
/// Borrowed text is already stripped of its block marker, except for
/// `TableRow` (the whole trimmed row) and `CodeLine` (verbatim).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag<'a> {
    /// A triple-backtick line with its (possibly empty) language token.
    Fence { lang: &'a str },
    /// Raw content inside an open fence.
    CodeLine(&'a str),
    Heading { level: u8, text: &'a str },
    TableRow(&'a str),
    ListItem(&'a str),
    BlockQuote(&'a str),
    Rule,
    Blank,
    Text(&'a str),
}

/// Fieldless discriminant of [`LineTag`], the column key of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Fence,
    CodeLine,
    Heading,
    TableRow,
    ListItem,
    BlockQuote,
    Rule,
    Blank,
    Text,
}

impl LineTag<'_> {
    pub fn kind(&self) -> TagKind {
        match self {
            LineTag::Fence { .. } => TagKind::Fence,
            LineTag::CodeLine(_) => TagKind::CodeLine,
            LineTag::Heading { .. } => TagKind::Heading,
            LineTag::TableRow(_) => TagKind::TableRow,
            LineTag::ListItem(_) => TagKind::ListItem,
            LineTag::BlockQuote(_) => TagKind::BlockQuote,
            LineTag::Rule => TagKind::Rule,
            LineTag::Blank => TagKind::Blank,
            LineTag::Text(_) => TagKind::Text,
        }
    }
}

/// A flushed block. Text is raw; escaping happens once, at emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Level is always 1 to 3.
    Heading { level: u8, text: String },
    Paragraph { lines: Vec<String> },
    List { items: Vec<String> },
    /// The first non-separator row; `rows` never contains separator rows.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    CodeBlock {
        lang: Option<String>,
        lines: Vec<String>,
    },
    Blockquote { text: String },
    HorizontalRule,
}
