use std::fmt;

use super::{Inline, List, MarkdownError, Table};

/// Top-level markdown node held by a [`Document`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockElement {
    Header(Header),
    Paragraph(Paragraph),
    Table(Table),
    List(List),
    Rule(Rule),
}

impl fmt::Display for BlockElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockElement::Header(header) => header.fmt(f),
            BlockElement::Paragraph(paragraph) => paragraph.fmt(f),
            BlockElement::Table(table) => table.fmt(f),
            BlockElement::List(list) => list.fmt(f),
            BlockElement::Rule(rule) => rule.fmt(f),
        }
    }
}

impl From<Header> for BlockElement {
    fn from(header: Header) -> Self {
        BlockElement::Header(header)
    }
}

impl From<Paragraph> for BlockElement {
    fn from(paragraph: Paragraph) -> Self {
        BlockElement::Paragraph(paragraph)
    }
}

impl From<Table> for BlockElement {
    fn from(table: Table) -> Self {
        BlockElement::Table(table)
    }
}

impl From<List> for BlockElement {
    fn from(list: List) -> Self {
        BlockElement::List(list)
    }
}

impl From<Rule> for BlockElement {
    fn from(rule: Rule) -> Self {
        BlockElement::Rule(rule)
    }
}

/// Ordered sequence of block elements rendered with one blank line between
/// blocks and a trailing newline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<BlockElement>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: impl Into<BlockElement>) {
        self.blocks.push(block.into());
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, block) in self.blocks.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", block)?;
        }
        Ok(())
    }
}

/// Section header, `#` through `######`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    text: String,
    level: u8,
}

impl Header {
    /// Creates a header at the given level.
    ///
    /// # Errors
    /// Returns `MarkdownError::InvalidHeaderLevel` unless the level is
    /// between 1 and 6.
    pub fn new(text: impl Into<String>, level: u8) -> Result<Self, MarkdownError> {
        if !(1..=6).contains(&level) {
            return Err(MarkdownError::InvalidHeaderLevel { level });
        }
        Ok(Self {
            text: text.into(),
            level,
        })
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.level {
            f.write_str("#")?;
        }
        write!(f, " {}", self.text.trim())
    }
}

/// Run of inline elements rendered on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn new(inline: impl Into<Inline>) -> Self {
        Self {
            inlines: vec![inline.into()],
        }
    }

    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inline in &self.inlines {
            write!(f, "{}", inline)?;
        }
        Ok(())
    }
}

/// Horizontal rule rendered as the marker repeated three times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    marker: char,
}

impl Rule {
    /// Creates a rule with an explicit marker.
    ///
    /// # Errors
    /// Returns `MarkdownError::InvalidRuleMarker` unless the marker is
    /// `'-'`, `'*'` or `'_'`.
    pub fn new(marker: char) -> Result<Self, MarkdownError> {
        if !matches!(marker, '-' | '*' | '_') {
            return Err(MarkdownError::InvalidRuleMarker { marker });
        }
        Ok(Self { marker })
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self { marker: '-' }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.marker, self.marker, self.marker)
    }
}
