//! Inline emphasis markers.

use crate::document::{RichText, Span};
use regex::Regex;
use std::sync::LazyLock;

/// `**strong**` spans.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// `*emphasis*` spans.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Split `text` into plain, strong and emphasised spans.
///
/// Strong markers are resolved first; single-asterisk emphasis is only
/// looked for in the text between them. Matching is non-greedy and spans do
/// not nest. Unpaired asterisks stay in the text.
///
/// ```rust
/// use aristotle_core::format::inline;
/// use aristotle_core::document::Span;
///
/// let text = inline::parse("a **b** and *c*");
/// assert_eq!(
///     text.spans(),
///     [
///         Span::Text("a ".into()),
///         Span::Strong("b".into()),
///         Span::Text(" and ".into()),
///         Span::Emphasis("c".into()),
///     ]
/// );
/// ```
pub fn parse(text: &str) -> RichText {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in STRONG_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_emphasis(&mut spans, &text[last..whole.start()]);
        spans.push(Span::Strong(inner.as_str().to_string()));
        last = whole.end();
    }
    push_emphasis(&mut spans, &text[last..]);
    RichText(spans)
}

fn push_emphasis(spans: &mut Vec<Span>, text: &str) {
    let mut last = 0;
    for caps in EMPHASIS_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(spans, &text[last..whole.start()]);
        spans.push(Span::Emphasis(inner.as_str().to_string()));
        last = whole.end();
    }
    push_text(spans, &text[last..]);
}

fn push_text(spans: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        spans.push(Span::Text(text.to_string()));
    }
}
