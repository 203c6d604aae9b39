//! Fallback strategy for loosely structured prose.

use super::inline;
use crate::document::{Block, RichText, StructuredDocument};
use regex::Regex;
use std::sync::LazyLock;

/// Numbered (`1. `), dashed (`- `, `• `) or starred (`* `) list markers.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)\.\s|[-•]\s|\*\s)").unwrap());

/// Split a trimmed line into `(numbered, item text)` when it is a list item.
pub fn list_item(line: &str) -> Option<(bool, &str)> {
    let caps = LIST_ITEM_RE.captures(line)?;
    let marker = caps.get(0)?;
    Some((caps.get(1).is_some(), &line[marker.end()..]))
}

/// Collects consecutive list items until something else interrupts them.
#[derive(Debug, Default)]
pub struct ListRun {
    ordered: bool,
    items: Vec<RichText>,
}

impl ListRun {
    /// Add an item. The first item of a run decides whether it is ordered.
    pub fn push(&mut self, ordered: bool, item: RichText) {
        if self.items.is_empty() {
            self.ordered = ordered;
        }
        self.items.push(item);
    }

    /// Emit the open run as one list block, if any items are pending.
    pub fn flush_into(&mut self, doc: &mut StructuredDocument) {
        if self.items.is_empty() {
            return;
        }
        doc.push(Block::List {
            ordered: self.ordered,
            items: std::mem::take(&mut self.items),
        });
    }
}

/// Generic strategy. The argument is not used.
pub fn format(raw: &str, _argument: &str) -> StructuredDocument {
    let mut doc = StructuredDocument::new();
    let mut list = ListRun::default();
    let lines: Vec<&str> = raw.split('\n').collect();
    let last_index = lines.len().saturating_sub(1);

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if let Some((ordered, text)) = list_item(trimmed) {
            list.push(ordered, inline::parse(text));
            continue;
        }
        list.flush_into(&mut doc);

        if trimmed.is_empty() {
            if index != last_index {
                doc.push(Block::Divider);
            }
        } else {
            doc.push(Block::paragraph(inline::parse(trimmed)));
        }
    }
    list.flush_into(&mut doc);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Span;

    #[test]
    fn test_single_line_is_one_paragraph() {
        let doc = format("Attention is all you need.", "");
        assert_eq!(
            doc.blocks(),
            [Block::paragraph(RichText::plain("Attention is all you need."))]
        );
    }

    #[test]
    fn test_numbered_run_then_paragraph() {
        // Given: Two numbered items followed by prose
        let doc = format("1. a\n2. b\nc", "");

        // Then: One ordered list with two items, then one paragraph
        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc.blocks()[0],
            Block::List {
                ordered: true,
                items: vec![RichText::plain("a"), RichText::plain("b")],
            }
        );
        assert_eq!(doc.blocks()[1], Block::paragraph(RichText::plain("c")));
    }

    #[test]
    fn test_first_item_decides_list_kind() {
        let doc = format("- x\n1. y\n• z", "");
        assert_eq!(doc.len(), 1);
        assert!(matches!(&doc.blocks()[0], Block::List { ordered: false, items } if items.len() == 3));
    }

    #[test]
    fn test_interrupted_run_makes_two_lists() {
        let doc = format("* a\ntext\n* b", "");
        assert_eq!(doc.len(), 3);
        assert!(matches!(doc.blocks()[0], Block::List { .. }));
        assert!(matches!(doc.blocks()[2], Block::List { .. }));
    }

    #[test]
    fn test_inner_empty_line_is_divider_trailing_is_not() {
        let doc = format("first\n\nsecond\n", "");
        assert_eq!(
            doc.blocks(),
            [
                Block::paragraph(RichText::plain("first")),
                Block::Divider,
                Block::paragraph(RichText::plain("second")),
            ]
        );
    }

    #[test]
    fn test_list_items_get_inline_emphasis() {
        let doc = format("- **Key** point", "");
        let Block::List { items, .. } = &doc.blocks()[0] else {
            unreachable!("expected list");
        };
        assert_eq!(
            items[0].spans(),
            [Span::Strong("Key".into()), Span::Text(" point".into())]
        );
    }

    #[test]
    fn test_indented_list_items_are_recognised() {
        let doc = format("   2. nested", "");
        assert!(matches!(&doc.blocks()[0], Block::List { ordered: true, .. }));
    }

    #[test]
    fn test_empty_response_is_empty_document() {
        assert!(format("", "").is_empty());
    }
}
