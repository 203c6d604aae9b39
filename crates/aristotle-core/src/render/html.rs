//! HTML markup for a [`StructuredDocument`].
//!
//! All text is escaped; tones and indentation become CSS classes so the
//! page's stylesheet decides what they look like.

use crate::document::{Block, RichText, Span, StructuredDocument, Tone};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// CSS class for a tone.
pub const fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "tone-success",
        Tone::Failure => "tone-failure",
        Tone::Warning => "tone-warning",
        Tone::Accent => "tone-accent",
        Tone::Neutral => "tone-neutral",
    }
}

/// Render the whole document, one element per block, newline separated.
///
/// ```rust
/// use aristotle_core::document::{Block, StructuredDocument};
/// use aristotle_core::render::to_html;
///
/// let doc = StructuredDocument::from(vec![Block::heading(2, "<b>")]);
/// assert_eq!(to_html(&doc), "<h2>&lt;b&gt;</h2>\n");
/// ```
pub fn to_html(doc: &StructuredDocument) -> String {
    let mut out = String::new();
    for block in doc.blocks() {
        // Writing into a String cannot fail.
        let _ = write_block(&mut out, block);
        out.push('\n');
    }
    out
}

fn write_block(out: &mut String, block: &Block) -> std::fmt::Result {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            write!(out, "<h{level}>{}</h{level}>", encode_text(text))
        },
        Block::Paragraph { text, indent, tone } => {
            write!(out, "<p{}>{}</p>", class_attr(&class_names(*indent, *tone)), rich_text(text))
        },
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            write!(out, "<{tag}>")?;
            for item in items {
                write!(out, "<li>{}</li>", rich_text(item))?;
            }
            write!(out, "</{tag}>")
        },
        Block::KeyValueRow {
            label,
            value,
            emphasis,
            indent,
        } => {
            let mut row = vec!["row".to_string()];
            row.extend(class_names(*indent, None));
            let value_class = emphasis.map(|tone| vec![tone_class(tone).to_string()]).unwrap_or_default();
            write!(
                out,
                "<div{}><span class=\"label\">{}:</span> <span{}>{}</span></div>",
                class_attr(&row),
                encode_text(label),
                class_attr(&value_class),
                encode_text(value)
            )
        },
        Block::LinkLine { url, label, indent } => write!(
            out,
            "<p{}><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></p>",
            class_attr(&class_names(*indent, None)),
            encode_double_quoted_attribute(url),
            encode_text(label)
        ),
        Block::Divider => write!(out, "<hr>"),
        Block::Preformatted { text } => write!(out, "<pre>{}</pre>", encode_text(text)),
        Block::LineBroken { lines } => {
            let body: Vec<String> = lines.iter().map(|l| encode_text(l).into_owned()).collect();
            write!(out, "<div>{}</div>", body.join("<br>"))
        },
    }
}

fn rich_text(text: &RichText) -> String {
    text.spans()
        .iter()
        .map(|span| match span {
            Span::Text(t) => encode_text(t).into_owned(),
            Span::Strong(t) => format!("<strong>{}</strong>", encode_text(t)),
            Span::Emphasis(t) => format!("<em>{}</em>", encode_text(t)),
        })
        .collect()
}

fn class_names(indent: u8, tone: Option<Tone>) -> Vec<String> {
    let mut names = Vec::new();
    if indent > 0 {
        names.push(format!("indent-{indent}"));
    }
    if let Some(tone) = tone {
        names.push(tone_class(tone).to_string());
    }
    names
}

fn class_attr(names: &[String]) -> String {
    if names.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;

    #[test]
    fn test_text_is_escaped_everywhere() {
        // Given: Blocks carrying markup-like text
        let doc = StructuredDocument::from(vec![
            Block::paragraph(RichText(vec![
                Span::Text("a < b ".into()),
                Span::Strong("&".into()),
            ])),
            Block::row("x<y", "<script>"),
            Block::Preformatted {
                text: "<pre>".into(),
            },
        ]);

        // When: Rendering
        let html = to_html(&doc);

        // Then: No raw angle brackets from content survive
        assert!(html.contains("<p>a &lt; b <strong>&amp;</strong></p>"));
        assert!(html.contains("x&lt;y:"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<pre>&lt;pre&gt;</pre>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_link_attribute_is_quoted_safely() {
        let doc = StructuredDocument::from(vec![Block::link("https://x.org/?q=\"a\"", "label", 1)]);
        let html = to_html(&doc);
        assert!(html.contains("href=\"https://x.org/?q=&quot;a&quot;\""));
        assert!(html.contains("class=\"indent-1\""));
    }

    #[test]
    fn test_tones_become_classes() {
        let html = to_html(&format::factcheck::format("Verdict: Contradicted", ""));
        assert!(html.contains("<div class=\"row\"><span class=\"label\">Verdict:</span> <span class=\"tone-failure\">Contradicted</span></div>"));
    }

    #[test]
    fn test_indented_row_class() {
        let doc = StructuredDocument::from(vec![Block::KeyValueRow {
            label: "Authors".into(),
            value: "A".into(),
            emphasis: None,
            indent: 1,
        }]);
        assert!(to_html(&doc).starts_with("<div class=\"row indent-1\">"));
    }

    #[test]
    fn test_line_broken_and_lists() {
        let doc = StructuredDocument::from(vec![
            Block::LineBroken {
                lines: vec!["a".into(), "b".into()],
            },
            Block::List {
                ordered: true,
                items: vec![RichText::plain("one")],
            },
            Block::Divider,
        ]);
        assert_eq!(to_html(&doc), "<div>a<br>b</div>\n<ol><li>one</li></ol>\n<hr>\n");
    }
}
