//! `/search` responses: a numbered list of papers.
//!
//! The service prints one group per paper:
//!
//! ```text
//! 1. Attention Is All You Need (2017)
//!    https://arxiv.org/abs/1706.03762
//!    Authors: Vaswani, Shazeer
//! ```
//!
//! Groups are re-numbered from 1 in display order regardless of the numbers
//! in the source text.

use super::inline;
use crate::document::{Block, StructuredDocument};
use regex::Regex;
use std::sync::LazyLock;

/// Unindented `<n>. <title>` line that opens a group.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());

/// A line consisting of a single URL.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static BARE_URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://\S+$").unwrap());

const SUB_CONTENT_INDENT: &str = "   ";
const AUTHORS_PREFIX: &str = "Authors:";

/// Search strategy.
pub fn format(raw: &str, argument: &str) -> StructuredDocument {
    let mut doc = StructuredDocument::new();
    let argument = argument.trim();
    doc.push(Block::heading(
        2,
        if argument.is_empty() {
            "Search results".to_string()
        } else {
            format!("Search results for \"{argument}\"")
        },
    ));

    let mut number = 0usize;
    let mut first = true;
    for group in groups(raw) {
        if group.iter().all(|line| line.trim().is_empty()) {
            continue;
        }
        if !first {
            doc.push(Block::Divider);
        }
        first = false;

        for line in group {
            if let Some(block) = classify_line(line, &mut number) {
                doc.push(block);
            }
        }
    }
    doc
}

fn groups(raw: &str) -> Vec<Vec<&str>> {
    let mut groups: Vec<Vec<&str>> = vec![Vec::new()];
    for line in raw.lines() {
        if TITLE_RE.is_match(line) {
            groups.push(Vec::new());
        }
        if let Some(current) = groups.last_mut() {
            current.push(line);
        }
    }
    groups
}

fn classify_line(line: &str, number: &mut usize) -> Option<Block> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = TITLE_RE.captures(line) {
        *number += 1;
        return Some(Block::heading(3, format!("{number}. {}", caps[1].trim())));
    }

    if line.starts_with(SUB_CONTENT_INDENT) {
        if BARE_URL_RE.is_match(trimmed) {
            return Some(Block::link(trimmed, trimmed, 1));
        }
        if let Some(authors) = trimmed.strip_prefix(AUTHORS_PREFIX) {
            return Some(Block::KeyValueRow {
                label: "Authors".to_string(),
                value: authors.trim().to_string(),
                emphasis: None,
                indent: 1,
            });
        }
        return Some(Block::indented(trimmed));
    }

    if BARE_URL_RE.is_match(trimmed) {
        return Some(Block::link(trimmed, trimmed, 0));
    }
    Some(Block::paragraph(inline::parse(trimmed)))
}
