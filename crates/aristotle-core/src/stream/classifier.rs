//! Turning raw stream lines into [`StreamEvent`]s.
//!
//! Classification is an ordered chain of matchers. Each one either claims
//! the line (producing an event or discarding it) or passes it on to the
//! next. A line no matcher claims is dropped.

use super::event::{CompletionResult, StreamEvent};
use crate::progress::clamp_percent_f64;
use serde_json::{Map, Value};

const DATA_PREFIX: &str = "data: ";
const BRACKETED_PREFIXES: [&str; 2] = ["[INFO]", "[WARNING]"];

/// Outcome of one matcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Match {
    /// The line is claimed and produced an event
    Event(StreamEvent),
    /// The line is claimed and produces nothing
    Discard,
    /// The line is not for this matcher
    Pass,
}

/// The views of a line every matcher sees.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// Line with surrounding whitespace removed
    pub trimmed: &'a str,
    /// `trimmed` without its `data: ` prefix, if it had one
    pub payload: &'a str,
}

/// A single step of the classification chain.
pub type LineMatcher = fn(Line<'_>) -> Match;

/// Matchers in the order they are tried.
pub const DEFAULT_MATCHERS: &[LineMatcher] = &[json_event, bracketed_log];

/// Classifies lines with a fixed matcher chain.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    matchers: &'static [LineMatcher],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_MATCHERS)
    }
}

impl Classifier {
    /// Classifier over an explicit chain.
    pub const fn new(matchers: &'static [LineMatcher]) -> Self {
        Self { matchers }
    }

    /// Classify one logical line.
    pub fn classify(&self, raw: &str) -> Option<StreamEvent> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let line = Line {
            trimmed,
            payload: trimmed.strip_prefix(DATA_PREFIX).unwrap_or(trimmed),
        };

        for matcher in self.matchers {
            match matcher(line) {
                Match::Event(event) => return Some(event),
                Match::Discard => return None,
                Match::Pass => {},
            }
        }
        tracing::trace!(line = trimmed, "Discarding unrecognised stream line");
        None
    }
}

/// Classify a line with the default matcher chain.
///
/// ```rust
/// use aristotle_core::stream::{classify, StreamEvent};
///
/// let event = classify(r#"data: {"type":"progress","percent":140}"#);
/// assert_eq!(event, Some(StreamEvent::Progress { percent: 100 }));
/// assert_eq!(classify("random chatter"), None);
/// ```
pub fn classify(line: &str) -> Option<StreamEvent> {
    Classifier::default().classify(line)
}

/// JSON payloads keyed by their `type` field.
pub fn json_event(line: Line<'_>) -> Match {
    let Ok(value) = serde_json::from_str::<Value>(line.payload) else {
        return Match::Pass;
    };
    let Value::Object(mut object) = value else {
        tracing::trace!(line = line.trimmed, "Discarding non-object JSON line");
        return Match::Discard;
    };

    let kind = object.get("type").and_then(Value::as_str).unwrap_or_default();
    let event = match kind {
        "progress" => StreamEvent::Progress {
            percent: percent_field(&object).unwrap_or(0),
        },
        "stage" => StreamEvent::Stage {
            message: message_field(&object),
            percent: percent_field(&object),
        },
        "info" => StreamEvent::Info {
            message: message_field(&object),
        },
        "complete" => StreamEvent::Complete {
            result: match object.remove("result") {
                Some(Value::Object(map)) => CompletionResult::from(map),
                _ => CompletionResult::from(Map::new()),
            },
        },
        other => {
            tracing::trace!(kind = other, "Discarding event of unknown type");
            return Match::Discard;
        },
    };
    Match::Event(event)
}

/// Plain-text log lines the service interleaves with JSON events.
pub fn bracketed_log(line: Line<'_>) -> Match {
    if BRACKETED_PREFIXES
        .iter()
        .any(|prefix| line.trimmed.starts_with(prefix))
    {
        Match::Event(StreamEvent::Unrecognized {
            line: line.trimmed.to_string(),
        })
    } else {
        Match::Pass
    }
}

fn percent_field(object: &Map<String, Value>) -> Option<u8> {
    object
        .get("percent")
        .and_then(Value::as_f64)
        .map(clamp_percent_f64)
}

fn message_field(object: &Map<String, Value>) -> Option<String> {
    match object.get("message")? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
