//! `/factpaper` responses are shown exactly as received.

use crate::document::{Block, StructuredDocument};

/// Fact-paper strategy: one preformatted block, no parsing.
pub fn format(raw: &str, _argument: &str) -> StructuredDocument {
    StructuredDocument::from(vec![Block::Preformatted {
        text: raw.to_string(),
    }])
}
