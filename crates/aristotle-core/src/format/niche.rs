//! `/niche` responses: report of a niche indexing run.

use super::inline;
use crate::document::{Block, StructuredDocument, Tone};

const SUCCESS_MARKER: &str = "successfully";
const TOPIC_LABEL: &str = "Topic:";
const STATISTIC_LABELS: [&str; 2] = ["Total papers fetched:", "Papers with abstracts:"];
const INDEXED_MARKER: &str = "Papers indexed";

/// Niche strategy. Each line is classified by substring, checked in the
/// order banner, topic, statistics, indexed note, plain text.
pub fn format(raw: &str, _argument: &str) -> StructuredDocument {
    let mut doc = StructuredDocument::new();
    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        doc.push(classify_line(trimmed));
    }
    doc
}

fn classify_line(line: &str) -> Block {
    if line.contains(SUCCESS_MARKER) {
        return Block::toned(line, Tone::Success);
    }
    if let Some((_, topic)) = line.split_once(TOPIC_LABEL) {
        return Block::row("Topic", topic.trim());
    }
    for label in STATISTIC_LABELS {
        if let Some((_, value)) = line.split_once(label) {
            return Block::KeyValueRow {
                label: label.trim_end_matches(':').to_string(),
                value: value.trim().to_string(),
                emphasis: None,
                indent: 1,
            };
        }
    }
    if line.contains(INDEXED_MARKER) {
        return Block::toned(line, Tone::Accent);
    }
    Block::paragraph(inline::parse(line))
}
