use super::{
    classify::classify,
    kinds::{CodeFence, TableRow},
    transition::{Action, transition},
    types::{Block, LineTag, ParserState},
};

/// The single open accumulator. Created lazily on the first matching line,
/// taken and flushed on every transition away from it.
#[derive(Debug, Default)]
enum Accumulator {
    #[default]
    None,
    Paragraph(Vec<String>),
    List(Vec<String>),
    Table {
        header: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
    Code {
        lang: Option<String>,
        lines: Vec<String>,
    },
}

impl Accumulator {
    fn state(&self) -> ParserState {
        match self {
            Accumulator::None => ParserState::None,
            Accumulator::Paragraph(_) => ParserState::Paragraph,
            Accumulator::List(_) => ParserState::List,
            Accumulator::Table { .. } => ParserState::Table,
            Accumulator::Code { .. } => ParserState::Code,
        }
    }
}

/// Line-at-a-time block builder: classifier, accumulators and flush controller.
///
/// One builder serves one document. It holds no shared state, so any number
/// of builders can run concurrently.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    open: Accumulator,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ParserState {
        self.open.state()
    }

    pub fn push(&mut self, line: &str) {
        let state = self.state();
        let tag = classify(state, line);

        match transition(state, tag.kind()) {
            Action::Append => self.append(tag),
            Action::Open => {
                self.flush();
                self.open_with(tag);
            }
            Action::Close => self.flush(),
            Action::Emit => {
                self.flush();
                self.emit(tag);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush; an unterminated fence still becomes a code block
        if self.state() == ParserState::Code {
            log::debug!("unterminated code fence, emitting buffered lines");
        }
        self.flush();
        self.out
    }

    fn append(&mut self, tag: LineTag<'_>) {
        let appended = match (&mut self.open, tag) {
            (Accumulator::Paragraph(lines), LineTag::Text(text)) => {
                lines.push(text.to_string());
                true
            }
            (Accumulator::List(items), LineTag::ListItem(item)) => {
                items.push(item.to_string());
                true
            }
            (Accumulator::Table { header, rows }, LineTag::TableRow(row)) => {
                add_table_row(header, rows, row);
                true
            }
            (Accumulator::Code { lines, .. }, LineTag::CodeLine(line)) => {
                lines.push(line.to_string());
                true
            }
            _ => false,
        };
        if !appended {
            self.flush();
            self.open_with(tag);
        }
    }

    fn open_with(&mut self, tag: LineTag<'_>) {
        let open = match tag {
            LineTag::Fence { lang } => Accumulator::Code {
                lang: CodeFence::lang(lang),
                lines: vec![],
            },
            LineTag::TableRow(row) => {
                let mut header = None;
                let mut rows = vec![];
                add_table_row(&mut header, &mut rows, row);
                Accumulator::Table { header, rows }
            }
            LineTag::ListItem(item) => Accumulator::List(vec![item.to_string()]),
            LineTag::Text(text) | LineTag::CodeLine(text) => {
                Accumulator::Paragraph(vec![text.trim().to_string()])
            }
            LineTag::Heading { .. } | LineTag::BlockQuote(_) | LineTag::Rule => {
                self.emit(tag);
                return;
            }
            LineTag::Blank => return,
        };
        self.open = open;
    }

    fn emit(&mut self, tag: LineTag<'_>) {
        let block = match tag {
            LineTag::Heading { level, text } => Block::Heading {
                level,
                text: text.to_string(),
            },
            LineTag::BlockQuote(text) => Block::Blockquote {
                text: text.to_string(),
            },
            LineTag::Rule => Block::HorizontalRule,
            _ => return,
        };
        self.out.push(block);
    }

    fn flush(&mut self) {
        let block = match std::mem::take(&mut self.open) {
            Accumulator::None => return,
            Accumulator::Paragraph(lines) => Block::Paragraph { lines },
            Accumulator::List(items) => Block::List { items },
            Accumulator::Table { header, rows } => match header {
                Some(header) => Block::Table { header, rows },
                // Only separator rows were seen
                None => return,
            },
            Accumulator::Code { lang, lines } => Block::CodeBlock { lang, lines },
        };
        log::trace!("flushed {block:?}");
        self.out.push(block);
    }
}

/// Separator rows are dropped; the first remaining row becomes the header.
fn add_table_row(header: &mut Option<Vec<String>>, rows: &mut Vec<Vec<String>>, row: &str) {
    let cells = TableRow::cells(row);
    if TableRow::is_separator(&cells) {
        return;
    }
    match header {
        None => *header = Some(cells),
        Some(_) => rows.push(cells),
    }
}
