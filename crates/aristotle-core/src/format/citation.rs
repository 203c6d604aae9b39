//! Citation line handling shared by the summary and fact-check strategies.

use crate::document::Block;
use regex::Regex;
use std::sync::LazyLock;

/// First URL on a line.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Numbered citation marker (`1. `).
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// `<n>) <title> (<year>) — <url>`
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static STRICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\)\s*(.+?)\s*\((\d{4})\)\s*—\s*(https?://\S+)\s*$").unwrap()
});

const SEPARATORS: [char; 5] = ['-', '—', '–', ':', '|'];

/// Turn one citation line into a block.
///
/// The first URL becomes the link target and the rest of the line, with
/// every copy of that URL removed, becomes the label. Only whole URLs are
/// removed; a longer URL sharing the same prefix is kept. Numbered citations
/// stay flush-left, unnumbered ones are indented. Lines without a URL are
/// indented text. Blank lines produce nothing.
pub fn loose(line: &str) -> Option<Block> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(found) = URL_RE.find(trimmed) else {
        return Some(Block::indented(trimmed));
    };
    let url = found.as_str();
    let remainder = trimmed
        .split_whitespace()
        .map(|token| token.strip_suffix(url).unwrap_or(token))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let label = remainder.trim_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c));

    let indent = u8::from(!NUMBERED_RE.is_match(label));
    let label = if label.is_empty() { url } else { label };
    Some(Block::link(url, label, indent))
}

/// Parse the fact-check citation format, `1) Title (2020) — https://...`.
pub fn strict(line: &str) -> Option<Block> {
    let caps = STRICT_RE.captures(line.trim())?;
    let label = format!("{}) {} ({})", &caps[1], &caps[2], &caps[3]);
    Some(Block::link(&caps[4], label, 0))
}

/// Strict pattern first, loose extraction otherwise.
pub fn strict_or_loose(line: &str) -> Option<Block> {
    strict(line).or_else(|| loose(line))
}
