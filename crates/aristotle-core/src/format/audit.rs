//! `/audit` responses: abstract coverage statistics.
//!
//! Two textual shapes are understood. The rich shape is a block that opens
//! with a `Database Statistics` line and may end in a `Database Status:`
//! line. The simple shape is flat `Label: value` lines plus per-paper dumps
//! that open with a `paperId:` line. Anything else is shown verbatim.

use crate::document::{Block, StructuredDocument, Tone};

const RICH_HEADER: &str = "Database Statistics";
const STATUS_LABEL: &str = "Database Status:";
const HEALTHY_MARKER: char = '✅';
const PAPER_ID_LABEL: &str = "paperid:";
const SIMPLE_LABELS: [&str; 4] = [
    "Total:",
    "With abstracts:",
    "Without abstracts:",
    "Sample missing IDs:",
];

/// Audit strategy.
pub fn format(raw: &str, _argument: &str) -> StructuredDocument {
    rich(raw)
        .or_else(|| simple(raw))
        .unwrap_or_else(|| verbatim(raw))
}

/// Whether a status text reports a healthy database.
pub fn status_tone(status: &str) -> Tone {
    if status.contains(HEALTHY_MARKER) {
        Tone::Success
    } else {
        Tone::Failure
    }
}

fn rich(raw: &str) -> Option<StructuredDocument> {
    let mut lines = raw.lines().skip_while(|line| !line.contains(RICH_HEADER));
    lines.next()?;

    let mut doc = StructuredDocument::new();
    doc.push(Block::heading(2, RICH_HEADER));
    let mut recognised = 0usize;

    for line in lines {
        let trimmed = line.trim();
        if let Some(status) = trimmed.strip_prefix(STATUS_LABEL) {
            let status = status.trim();
            doc.push(Block::KeyValueRow {
                label: "Database Status".to_string(),
                value: status.to_string(),
                emphasis: Some(status_tone(status)),
                indent: 0,
            });
            recognised += 1;
            break;
        }
        if let Some((label, value)) = label_value(trimmed) {
            doc.push(Block::row(label, value));
            recognised += 1;
        }
    }

    (recognised > 0).then_some(doc)
}

fn simple(raw: &str) -> Option<StructuredDocument> {
    let mut doc = StructuredDocument::new();
    let mut recognised = 0usize;
    let mut in_paper = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            in_paper = false;
            continue;
        }

        if let Some(label) = SIMPLE_LABELS.iter().find(|label| trimmed.starts_with(*label)) {
            let value = trimmed[label.len()..].trim();
            doc.push(Block::row(label.trim_end_matches(':'), value));
            recognised += 1;
            in_paper = false;
            continue;
        }

        if starts_with_ignore_case(trimmed, PAPER_ID_LABEL) {
            let id = trimmed[PAPER_ID_LABEL.len()..].trim();
            doc.push(Block::heading(3, format!("Paper {id}")));
            recognised += 1;
            in_paper = true;
            continue;
        }

        match label_value(trimmed) {
            Some((label, value)) if in_paper => {
                if label == "url" && value.starts_with("http") {
                    doc.push(Block::link(value, value, 1));
                } else {
                    doc.push(Block::KeyValueRow {
                        label: label.to_string(),
                        value: value.to_string(),
                        emphasis: None,
                        indent: 1,
                    });
                }
            },
            _ => doc.push(Block::indented(trimmed)),
        }
    }

    (recognised > 0).then_some(doc)
}

fn verbatim(raw: &str) -> StructuredDocument {
    StructuredDocument::from(vec![Block::LineBroken {
        lines: raw.lines().map(str::to_owned).collect(),
    }])
}

fn label_value(line: &str) -> Option<(&str, &str)> {
    let (label, value) = line.split_once(':')?;
    let label = label.trim().trim_start_matches(['-', '•', '*']).trim();
    if label.is_empty() {
        return None;
    }
    Some((label, value.trim()))
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
