//! `/fact` responses: a verdict record.
//!
//! The service answers with four labelled fields whose order in the text is
//! not relied on:
//!
//! ```text
//! Verdict: Supported
//! Confidence: 82%
//! Rationale: Two abstracts report ...
//! Citations:
//! 1) Title (2021) — https://...
//! ```

use super::{citation, generic, inline};
use crate::document::{Block, StructuredDocument, Tone};
use regex::Regex;
use std::sync::LazyLock;

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static VERDICT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Verdict:[ \t]*([^\n]*)").unwrap());

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static CONFIDENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Confidence:[ \t]*([^\n]*)").unwrap());

/// Runs up to the citation list or the end of the text.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static RATIONALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Rationale:\s*(.*?)(?:\nCitations:|\z)").unwrap());

/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static CITATIONS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)Citations:\n(.*)").unwrap());

const CONTEXT_MARKER: &str = "context=";

/// Accent for a verdict, by substring of its lower-cased text.
///
/// The checks run in a fixed order, so "unsupported" reads as supported.
pub fn verdict_tone(verdict: &str) -> Tone {
    let lower = verdict.to_lowercase();
    if lower.contains("supported") {
        Tone::Success
    } else if lower.contains("contradicted") {
        Tone::Failure
    } else if lower.contains("insufficient") {
        Tone::Warning
    } else {
        Tone::Neutral
    }
}

/// Fact-check strategy. Falls back to the generic strategy when none of the
/// four fields is present.
pub fn format(raw: &str, argument: &str) -> StructuredDocument {
    let capture = |re: &Regex| re.captures(raw).and_then(|c| c.get(1)).map(|m| m.as_str().trim());
    let verdict = capture(&VERDICT_RE);
    let confidence = capture(&CONFIDENCE_RE);
    let rationale = capture(&RATIONALE_RE);
    let citations = capture(&CITATIONS_RE);

    if verdict.is_none() && confidence.is_none() && rationale.is_none() && citations.is_none() {
        return generic::format(raw, argument);
    }

    let mut doc = StructuredDocument::new();
    doc.push(Block::heading(2, "Fact check"));

    let claim = argument
        .find(CONTEXT_MARKER)
        .map_or(argument, |at| &argument[..at])
        .trim();
    if !claim.is_empty() {
        doc.push(Block::row("Claim", claim));
    }

    if let Some(verdict) = verdict {
        doc.push(Block::KeyValueRow {
            label: "Verdict".to_string(),
            value: verdict.to_string(),
            emphasis: Some(verdict_tone(verdict)),
            indent: 0,
        });
    }
    if let Some(confidence) = confidence {
        doc.push(Block::row("Confidence", confidence));
    }
    if let Some(rationale) = rationale.filter(|r| !r.is_empty()) {
        doc.push(Block::heading(3, "Rationale"));
        for line in rationale.lines().map(str::trim).filter(|l| !l.is_empty()) {
            doc.push(Block::paragraph(inline::parse(line)));
        }
    }
    if let Some(citations) = citations {
        doc.push(Block::heading(3, "Citations"));
        for block in citations.lines().filter_map(citation::strict_or_loose) {
            doc.push(block);
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RichText;

    const RESPONSE: &str = "\
Confidence: 82%
Verdict: Supported
Rationale: Two abstracts report gains.
Both use held-out data.
Citations:
1) Deep Sets (2017) — https://arxiv.org/abs/1703.06114
2) Set Transformer - https://arxiv.org/abs/1810.00825";

    #[test]
    fn test_fields_in_fixed_display_order() {
        // Given: Fields in a different order than they are displayed
        let doc = format(RESPONSE, "permutation invariance helps context=deep sets");
        let blocks = doc.blocks();

        // Then: Heading, claim, verdict, confidence, rationale, citations
        assert_eq!(blocks[0], Block::heading(2, "Fact check"));
        assert_eq!(blocks[1], Block::row("Claim", "permutation invariance helps"));
        assert_eq!(
            blocks[2],
            Block::KeyValueRow {
                label: "Verdict".into(),
                value: "Supported".into(),
                emphasis: Some(Tone::Success),
                indent: 0,
            }
        );
        assert_eq!(blocks[3], Block::row("Confidence", "82%"));
        assert_eq!(blocks[4], Block::heading(3, "Rationale"));
        assert_eq!(blocks[5], Block::paragraph(RichText::plain("Two abstracts report gains.")));
        assert_eq!(blocks[6], Block::paragraph(RichText::plain("Both use held-out data.")));
        assert_eq!(blocks[7], Block::heading(3, "Citations"));
        assert_eq!(
            blocks[8],
            Block::link("https://arxiv.org/abs/1703.06114", "1) Deep Sets (2017)", 0)
        );
        assert_eq!(
            blocks[9],
            Block::link("https://arxiv.org/abs/1810.00825", "2) Set Transformer", 1)
        );
    }

    #[test]
    fn test_verdict_tones() {
        assert_eq!(verdict_tone("Supported"), Tone::Success);
        assert_eq!(verdict_tone("CONTRADICTED"), Tone::Failure);
        assert_eq!(verdict_tone("Insufficient evidence"), Tone::Warning);
        assert_eq!(verdict_tone("Unclear"), Tone::Neutral);
        assert_eq!(verdict_tone("Unsupported"), Tone::Success);
    }

    #[test]
    fn test_partial_record_omits_missing_blocks() {
        let doc = format("Verdict: Contradicted", "");
        assert_eq!(doc.len(), 2);
        assert!(matches!(
            &doc.blocks()[1],
            Block::KeyValueRow { emphasis: Some(Tone::Failure), .. }
        ));
    }

    #[test]
    fn test_no_fields_equals_generic_output() {
        // Given: A response without any fact-check field
        let raw = "The service could not find evidence.\n\n- try a broader claim";

        // Then: The document is exactly what the generic strategy produces
        assert_eq!(format(raw, "claim"), generic::format(raw, "claim"));
    }
}
