//! Markdown document object model.
//!
//! Reports are assembled as a tree of typed nodes (headers, paragraphs,
//! tables, lists, rules) and rendered to text in one pass. Structural rules
//! are enforced when nodes are constructed, so a [`Document`] that exists is
//! always renderable.
//!
//! # Example
//!
//! ```
//! use blackduck_report::markdown::{Document, Header, Inline, Paragraph};
//!
//! # fn main() -> Result<(), blackduck_report::markdown::MarkdownError> {
//! let mut document = Document::new();
//! document.push(Header::new("Release Notes", 1)?);
//! document.push(Paragraph::new(Inline::text("Nothing to report.")));
//!
//! assert_eq!(
//!     document.to_string(),
//!     "# Release Notes\n\nNothing to report.\n"
//! );
//! # Ok(())
//! # }
//! ```

mod document;
mod list;
mod table;
mod text;

pub use document::{BlockElement, Document, Header, Paragraph, Rule};
pub use list::{List, ListItem};
pub use table::{Alignment, HeaderCell, Table, TableHeader, TableRow};
pub use text::Inline;

use thiserror::Error;

/// Structural violation raised while building a document node
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MarkdownError {
    #[error("Header level must be between 1 and 6, got {level}")]
    InvalidHeaderLevel { level: u8 },

    #[error("Table header cells length must be greater than 0")]
    EmptyTableHeader,

    #[error("Rows must have the same number of cells as headers (header has {header}, row has {row})")]
    CellCountMismatch { header: usize, row: usize },

    #[error("List bullet must be one of '-', '*' or '+', got {bullet:?}")]
    InvalidBullet { bullet: char },

    #[error("Horizontal rule marker must be one of '-', '*' or '_', got {marker:?}")]
    InvalidRuleMarker { marker: char },

    #[error("Emphasis marker must be '*' or '_', got {marker:?}")]
    InvalidEmphasisMarker { marker: char },
}
