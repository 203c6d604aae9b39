//! The structured document handed from the formatters to a renderer.
//!
//! A document is a flat, append-only sequence of [`Block`]s. Formatters build
//! it incrementally and renderers receive it as an immutable snapshot. Text
//! is stored raw; escaping is the renderer's job.

use serde::Serialize;

/// Accent applied to a block. Selects colour only, never structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Positive outcome (supported verdict, healthy status, success banner)
    Success,
    /// Negative outcome (contradicted verdict, unhealthy status)
    Failure,
    /// Inconclusive outcome (insufficient evidence)
    Warning,
    /// Highlighted action note
    Accent,
    /// Explicitly uncoloured
    Neutral,
}

/// A run of inline text with at most one emphasis style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "lowercase")]
pub enum Span {
    /// Unstyled text
    Text(String),
    /// `**strong**` text
    Strong(String),
    /// `*emphasised*` text
    Emphasis(String),
}

impl Span {
    /// The text of the span without styling.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Strong(text) | Self::Emphasis(text) => text,
        }
    }
}

/// Inline content of a paragraph or list item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<Span>);

impl RichText {
    /// A single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self(vec![Span::Text(text.into())])
    }

    /// The spans in order.
    pub fn spans(&self) -> &[Span] {
        &self.0
    }

    /// Concatenated text of every span, styling dropped.
    pub fn to_plain(&self) -> String {
        self.0.iter().map(Span::as_str).collect()
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

/// One visual unit of a formatted response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section or item title
    Heading {
        /// 1 is the most prominent
        level: u8,
        /// Heading text
        text: String,
    },
    /// Free text with inline emphasis
    Paragraph {
        /// Inline content
        text: RichText,
        /// Nesting depth, 0 is flush-left
        indent: u8,
        /// Optional accent (banners, action notes)
        tone: Option<Tone>,
    },
    /// Coalesced run of list items
    List {
        /// Numbered list when true
        ordered: bool,
        /// Items in source order
        items: Vec<RichText>,
    },
    /// Labelled value such as `Verdict: Supported`
    KeyValueRow {
        /// Label without the trailing colon
        label: String,
        /// Value text
        value: String,
        /// Optional accent for the value
        emphasis: Option<Tone>,
        /// Nesting depth, 0 is flush-left
        indent: u8,
    },
    /// A hyperlink on its own line
    LinkLine {
        /// Link target
        url: String,
        /// Visible label; never repeats the URL unless it is the URL
        label: String,
        /// Nesting depth, 0 is flush-left
        indent: u8,
    },
    /// Horizontal rule
    Divider,
    /// Text rendered verbatim in a fixed-width block
    Preformatted {
        /// Raw text
        text: String,
    },
    /// Text rendered verbatim with each newline turned into a line break
    LineBroken {
        /// Raw lines
        lines: Vec<String>,
    },
}

impl Block {
    /// Heading block.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// Flush-left paragraph without accent.
    pub fn paragraph(text: RichText) -> Self {
        Self::Paragraph {
            text,
            indent: 0,
            tone: None,
        }
    }

    /// Indented plain-text paragraph.
    pub fn indented(text: impl Into<String>) -> Self {
        Self::Paragraph {
            text: RichText::plain(text),
            indent: 1,
            tone: None,
        }
    }

    /// Plain-text paragraph with an accent.
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::Paragraph {
            text: RichText::plain(text),
            indent: 0,
            tone: Some(tone),
        }
    }

    /// Flush-left key/value row without accent.
    pub fn row(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::KeyValueRow {
            label: label.into(),
            value: value.into(),
            emphasis: None,
            indent: 0,
        }
    }

    /// Link line.
    pub fn link(url: impl Into<String>, label: impl Into<String>, indent: u8) -> Self {
        Self::LinkLine {
            url: url.into(),
            label: label.into(),
            indent,
        }
    }
}

/// Ordered, append-only sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredDocument {
    blocks: Vec<Block>,
}

impl StructuredDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when no block has been pushed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<Block>> for StructuredDocument {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}
