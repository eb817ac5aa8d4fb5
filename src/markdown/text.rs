use std::fmt;

use super::MarkdownError;

/// Inline fragment used inside paragraphs, table cells and list items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text rendered verbatim
    Text(String),
    /// Code span wrapped in backticks
    Code(String),
    /// Emphasised text wrapped in a marker character on both sides
    Emphasis { marker: char, text: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    pub fn code(text: impl Into<String>) -> Self {
        Inline::Code(text.into())
    }

    /// Creates an emphasised fragment.
    ///
    /// # Errors
    /// Returns `MarkdownError::InvalidEmphasisMarker` unless the marker is
    /// `'*'` or `'_'`.
    pub fn emphasis(text: impl Into<String>, marker: char) -> Result<Self, MarkdownError> {
        if !matches!(marker, '*' | '_') {
            return Err(MarkdownError::InvalidEmphasisMarker { marker });
        }
        Ok(Inline::Emphasis {
            marker,
            text: text.into(),
        })
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Text(text) => f.write_str(text),
            Inline::Code(text) => write!(f, "`{}`", text),
            Inline::Emphasis { marker, text } => write!(f, "{}{}{}", marker, text, marker),
        }
    }
}

impl From<String> for Inline {
    fn from(text: String) -> Self {
        Inline::Text(text)
    }
}

impl From<&str> for Inline {
    fn from(text: &str) -> Self {
        Inline::Text(text.to_string())
    }
}
