//! Response formatting.
//!
//! Every strategy is a pure function from the raw response text and the
//! command argument to a [`StructuredDocument`]. Strategies never fail: when
//! a pattern misses, the block is omitted, and when nothing at all is
//! recognised the strategy falls back to a simpler rendering.
//!
//! ```rust
//! use aristotle_core::format::format_for_query;
//! use aristotle_core::document::Block;
//!
//! let doc = format_for_query("/factpaper 1234", "raw <text>");
//! assert_eq!(doc.blocks(), [Block::Preformatted { text: "raw <text>".into() }]);
//! ```

pub mod audit;
pub mod citation;
pub mod factcheck;
pub mod factpaper;
pub mod generic;
pub mod inline;
pub mod niche;
pub mod research;
pub mod search;
pub mod summary;

pub use research::research_result;

use crate::command::{CommandInvocation, CommandTag};
use crate::document::StructuredDocument;

/// Signature shared by all strategies: `(raw response, command argument)`.
pub type Strategy = fn(&str, &str) -> StructuredDocument;

/// Format a response for a command, or with the generic strategy when there
/// is none.
pub fn format(tag: Option<CommandTag>, raw: &str, argument: &str) -> StructuredDocument {
    match tag {
        Some(tag) => tag.format(raw, argument),
        None => generic::format(raw, argument),
    }
}

/// Format a response for a command given by name (`"search"` or `"/search"`).
///
/// Names outside the known set use the generic strategy.
pub fn format_tagged(tag: &str, raw: &str, argument: &str) -> StructuredDocument {
    format(tag.parse().ok(), raw, argument)
}

/// Parse the query the user typed and format the response accordingly.
pub fn format_for_query(query: &str, raw: &str) -> StructuredDocument {
    let invocation = CommandInvocation::parse(query);
    tracing::debug!(
        command = invocation.command.map(CommandTag::as_str),
        "Formatting response"
    );
    format(invocation.command, raw, &invocation.argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, RichText};

    #[test]
    fn test_unknown_tag_uses_generic() {
        let raw = "1. a\n2. b";
        assert_eq!(format_tagged("rehydrate", raw, ""), generic::format(raw, ""));
        assert_eq!(format(None, raw, ""), generic::format(raw, ""));
    }

    #[test]
    fn test_known_tag_by_name() {
        let doc = format_tagged("/factpaper", "x", "");
        assert_eq!(doc.blocks(), [Block::Preformatted { text: "x".into() }]);
    }

    #[test]
    fn test_query_dispatch_passes_argument() {
        let doc = format_for_query("/search graph nets", "No results.");
        assert_eq!(doc.blocks()[0], Block::heading(2, "Search results for \"graph nets\""));
    }

    #[test]
    fn test_plain_query_is_generic() {
        let doc = format_for_query("what is attention", "It is a mechanism.");
        assert_eq!(
            doc.blocks(),
            [Block::paragraph(RichText::plain("It is a mechanism."))]
        );
    }
}
