//! Summary of a completed research run.

use crate::document::{Block, StructuredDocument};
use crate::stream::CompletionResult;
use serde_json::Value;

/// Document for the `complete` event of a research stream.
///
/// Known fields come first in a fixed order; other keys follow in the order
/// the service sent them.
pub fn research_result(result: &CompletionResult) -> StructuredDocument {
    let mut doc = StructuredDocument::new();
    doc.push(Block::heading(2, "Research complete"));

    if let Some(path) = &result.output_path {
        doc.push(Block::row("Output path", path));
    }
    let counts = [
        ("Papers analyzed", result.papers_analyzed),
        ("Hypotheses generated", result.hypotheses_generated),
        ("Simulations created", result.simulations_created),
    ];
    for (label, count) in counts {
        if let Some(count) = count {
            doc.push(Block::row(label, count.to_string()));
        }
    }

    for (key, value) in &result.extra {
        let value = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        doc.push(Block::row(key, value));
    }
    doc
}
