/// Pipe table row knowledge: detection, cell splitting and separator rows.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// Returns the trimmed row if `line` is a table row.
    pub fn sig(line: &str) -> Option<&str> {
        let trimmed = line.trim();
        trimmed.starts_with(Self::PIPE).then_some(trimmed)
    }

    /// Splits a row into trimmed cells.
    ///
    /// One leading and one trailing pipe are row delimiters, not cell
    /// boundaries, so they produce no empty outer cells.
    pub fn cells(row: &str) -> Vec<String> {
        let row = row.trim();
        let row = row.strip_prefix(Self::PIPE).unwrap_or(row);
        let row = row.strip_suffix(Self::PIPE).unwrap_or(row);
        row.split(Self::PIPE)
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    /// A separator row has only `-`/`:` cells, each non-empty.
    pub fn is_separator(cells: &[String]) -> bool {
        !cells.is_empty()
            && cells.iter().all(|cell| {
                !cell.is_empty() && cell.chars().all(|c| matches!(c, '-' | ':'))
            })
    }
}
