//! Text output formatting

use aristotle_core::{Block, LogEntry, LogKind, RichText, Span, StructuredDocument, Tone};
use colored::{ColoredString, Colorize};

const INDENT: &str = "   ";
const DIVIDER_WIDTH: usize = 40;

/// Render a document for the terminal.
///
/// Headings other than the first are preceded by a blank line. The result
/// has no trailing newline.
pub fn render(doc: &StructuredDocument) -> String {
    let mut lines: Vec<String> = Vec::new();
    for block in doc.blocks() {
        if matches!(block, Block::Heading { .. }) && !lines.is_empty() {
            lines.push(String::new());
        }
        render_block(block, &mut lines);
    }
    lines.join("\n")
}

fn render_block(block: &Block, lines: &mut Vec<String>) {
    match block {
        Block::Heading { level, text } => {
            let styled = match *level {
                1 => text.bold().underline(),
                2 => text.bold(),
                _ => text.bold().dimmed(),
            };
            lines.push(styled.to_string());
        },
        Block::Paragraph { text, indent, tone } => {
            lines.push(format!("{}{}", indent_of(*indent), rich(text, *tone)));
        },
        Block::List { ordered, items } => {
            for (idx, item) in items.iter().enumerate() {
                let marker = if *ordered {
                    format!("{}.", idx + 1)
                } else {
                    "•".to_string()
                };
                lines.push(format!("{INDENT}{marker} {}", rich(item, None)));
            }
        },
        Block::KeyValueRow {
            label,
            value,
            emphasis,
            indent,
        } => {
            lines.push(format!(
                "{}{}: {}",
                indent_of(*indent),
                label.bold(),
                paint(value, *emphasis)
            ));
        },
        Block::LinkLine { url, label, indent } => {
            let line = if label == url {
                url.underline().to_string()
            } else {
                format!("{label} {}", format!("<{url}>").underline())
            };
            lines.push(format!("{}{line}", indent_of(*indent)));
        },
        Block::Divider => lines.push("─".repeat(DIVIDER_WIDTH).dimmed().to_string()),
        Block::Preformatted { text } => lines.push(text.clone()),
        Block::LineBroken { lines: raw } => lines.extend(raw.iter().cloned()),
    }
}

fn indent_of(depth: u8) -> String {
    INDENT.repeat(usize::from(depth))
}

fn rich(text: &RichText, tone: Option<Tone>) -> String {
    text.spans()
        .iter()
        .map(|span| {
            let painted = paint(span.as_str(), tone);
            match span {
                Span::Text(_) => painted.to_string(),
                Span::Strong(_) => painted.bold().to_string(),
                Span::Emphasis(_) => painted.italic().to_string(),
            }
        })
        .collect()
}

fn paint(text: &str, tone: Option<Tone>) -> ColoredString {
    match tone {
        Some(Tone::Success) => text.green(),
        Some(Tone::Failure) => text.red(),
        Some(Tone::Warning) => text.yellow(),
        Some(Tone::Accent) => text.cyan(),
        Some(Tone::Neutral) | None => text.normal(),
    }
}

/// One activity log line: `HH:MM:SS icon message`.
pub fn log_line(entry: &LogEntry) -> String {
    let message = match entry.kind {
        LogKind::Stage => entry.message.bold(),
        LogKind::Info => entry.message.normal(),
        LogKind::Success => entry.message.green(),
        LogKind::Error => entry.message.red(),
        LogKind::Warning => entry.message.yellow(),
    };
    format!(
        "{} {} {message}",
        entry.timestamp.format("%H:%M:%S").to_string().dimmed(),
        entry.icon()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_renders_rows_lists_and_links() {
        // Given: A document mixing block kinds
        plain();
        let doc = StructuredDocument::from(vec![
            Block::heading(2, "Fact check"),
            Block::row("Verdict", "Supported"),
            Block::List {
                ordered: true,
                items: vec![RichText::plain("first"), RichText::plain("second")],
            },
            Block::link("https://x.org", "1) Deep Sets (2017)", 1),
            Block::link("https://y.org", "https://y.org", 0),
        ]);

        // When: Rendering as text
        let out = render(&doc);

        // Then: Each block lands on its own line with its indentation
        assert_eq!(
            out,
            "Fact check\nVerdict: Supported\n   1. first\n   2. second\n   1) Deep Sets (2017) <https://x.org>\nhttps://y.org"
        );
    }

    #[test]
    fn test_blank_line_before_later_headings() {
        plain();
        let doc = StructuredDocument::from(vec![
            Block::heading(2, "Summary"),
            Block::indented("body"),
            Block::heading(3, "Citations"),
        ]);
        assert_eq!(render(&doc), "Summary\n   body\n\nCitations");
    }

    #[test]
    fn test_verbatim_blocks_are_untouched() {
        plain();
        let doc = StructuredDocument::from(vec![
            Block::Preformatted {
                text: "a  b\n  c".into(),
            },
            Block::LineBroken {
                lines: vec!["x".into(), "y".into()],
            },
            Block::Divider,
        ]);
        assert_eq!(render(&doc), format!("a  b\n  c\nx\ny\n{}", "─".repeat(40)));
    }

    #[test]
    fn test_inline_spans_keep_their_text() {
        plain();
        let doc = StructuredDocument::from(vec![Block::paragraph(RichText(vec![
            Span::Text("a ".into()),
            Span::Strong("b".into()),
            Span::Emphasis("c".into()),
        ]))]);
        assert_eq!(render(&doc), "a bc");
    }

    #[test]
    fn test_log_line_layout() {
        plain();
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).single().unwrap(),
            kind: LogKind::Warning,
            message: "slow upstream".into(),
        };
        assert_eq!(log_line(&entry), "09:03:07 ⚠️ slow upstream");
    }
}
