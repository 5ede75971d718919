//! Inline elements for document content

use serde::{Deserialize, Serialize};

/// Inline-level content element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text content
    Text(String),
    /// Formatted content
    Format(FormatType, Box<Inline>),
    /// A span containing multiple inline elements
    Span(Vec<Inline>),
    /// A line break
    Break,
}

/// Text formatting types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatType {
    Bold,
    Underline,
}

impl Inline {
    /// Plain text inline
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Bold text inline
    pub fn bold(text: impl Into<String>) -> Self {
        Inline::Format(FormatType::Bold, Box::new(Inline::Text(text.into())))
    }

    /// Flatten to plain text. Line breaks become a single space.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(text) => text.clone(),
            Inline::Format(_, inner) => inner.plain_text(),
            Inline::Span(inlines) => inlines.iter().map(Inline::plain_text).collect(),
            Inline::Break => " ".to_string(),
        }
    }
}

/// Concatenate the plain text of a run of inlines
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_wraps_text() {
        let bold = Inline::bold("முக்கியம்");
        if let Inline::Format(FormatType::Bold, inner) = bold {
            assert_eq!(*inner, Inline::Text("முக்கியம்".to_string()));
        } else {
            panic!("Expected Bold format");
        }
    }

    #[test]
    fn test_plain_text_flattens_spans() {
        let span = Inline::Span(vec![
            Inline::text("ஒன்று"),
            Inline::Break,
            Inline::bold("இரண்டு"),
        ]);
        assert_eq!(span.plain_text(), "ஒன்று இரண்டு");
    }
}
