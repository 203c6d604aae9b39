//! `/sum` responses: bullet summary followed by a citation list.

use super::{citation, inline};
use super::generic::ListRun;
use crate::document::{Block, StructuredDocument};

const CITATIONS_SEPARATOR: &str = "\n\nCitations:\n";
const BULLET_PREFIX: &str = "* ";

/// Summary strategy.
pub fn format(raw: &str, _argument: &str) -> StructuredDocument {
    let (main, citations) = match raw.split_once(CITATIONS_SEPARATOR) {
        Some((main, citations)) => (main, citations),
        None => (raw, ""),
    };

    let mut doc = StructuredDocument::new();
    push_main(&mut doc, main);

    let links: Vec<Block> = citations.lines().filter_map(citation::loose).collect();
    if !links.is_empty() {
        doc.push(Block::heading(3, "Citations"));
        for link in links {
            doc.push(link);
        }
    }
    doc
}

fn push_main(doc: &mut StructuredDocument, main: &str) {
    let mut list = ListRun::default();
    for line in main.lines() {
        let trimmed = line.trim();
        if let Some(item) = trimmed.strip_prefix(BULLET_PREFIX) {
            list.push(false, inline::parse(item));
            continue;
        }
        list.flush_into(doc);

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.ends_with(':') {
            doc.push(Block::heading(3, trimmed));
        } else {
            doc.push(Block::paragraph(inline::parse(trimmed)));
        }
    }
    list.flush_into(doc);
}
