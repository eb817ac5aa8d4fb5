use std::fmt;

use super::{Inline, MarkdownError};

/// Column alignment expressed in the delimiter row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No alignment marker
    #[default]
    Default,
    Left,
    Center,
    Right,
}

impl Alignment {
    fn delimiter(self) -> &'static str {
        match self {
            Alignment::Default => "---",
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        }
    }
}

/// Header cell carrying its column alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    text: String,
    alignment: Alignment,
}

impl HeaderCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Default,
        }
    }

    pub fn aligned(text: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            text: text.into(),
            alignment,
        }
    }
}

/// Header row of a table; a table cannot exist without one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    cells: Vec<HeaderCell>,
}

impl TableHeader {
    /// Creates a header row.
    ///
    /// # Errors
    /// Returns `MarkdownError::EmptyTableHeader` when no cells are given.
    pub fn new(cells: Vec<HeaderCell>) -> Result<Self, MarkdownError> {
        if cells.is_empty() {
            return Err(MarkdownError::EmptyTableHeader);
        }
        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for TableHeader {
    /// Renders the cell line and the delimiter line beneath it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "| {} ", cell.text)?;
        }
        writeln!(f, "|")?;
        for cell in &self.cells {
            write!(f, "| {} ", cell.alignment.delimiter())?;
        }
        write!(f, "|")
    }
}

/// Body row of inline cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<Inline>,
}

impl TableRow {
    pub fn new(cells: Vec<Inline>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "| {} ", cell)?;
        }
        write!(f, "|")
    }
}

/// Markdown table; every row must match the header's cell count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: TableHeader,
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new(header: TableHeader) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Creates a table with its rows in one step.
    ///
    /// # Errors
    /// Returns `MarkdownError::CellCountMismatch` when any row's cell count
    /// differs from the header's.
    pub fn with_rows(header: TableHeader, rows: Vec<TableRow>) -> Result<Self, MarkdownError> {
        let mut table = Self::new(header);
        for row in rows {
            table.add_row(row)?;
        }
        Ok(table)
    }

    /// Appends a row, enforcing the header's cell count.
    ///
    /// # Errors
    /// Returns `MarkdownError::CellCountMismatch` when the cell counts differ.
    pub fn add_row(&mut self, row: TableRow) -> Result<(), MarkdownError> {
        if row.len() != self.header.len() {
            return Err(MarkdownError::CellCountMismatch {
                header: self.header.len(),
                row: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for row in &self.rows {
            write!(f, "\n{}", row)?;
        }
        Ok(())
    }
}
