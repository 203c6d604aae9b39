//! Typed events carried by the research stream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One classified line of the research stream.
///
/// Percentages are already clamped to `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    /// Overall completion percentage
    Progress {
        /// Clamped percentage
        percent: u8,
    },
    /// A pipeline stage with an optional message and percentage
    Stage {
        /// Stage description
        message: Option<String>,
        /// Clamped percentage, when the stage reports one
        percent: Option<u8>,
    },
    /// Informational message
    Info {
        /// Message text
        message: Option<String>,
    },
    /// Terminal success event
    Complete {
        /// Summary of the finished run
        result: CompletionResult,
    },
    /// A bracketed log line (`[INFO] ...`, `[WARNING] ...`) that is not JSON
    Unrecognized {
        /// The trimmed raw line
        line: String,
    },
}

/// Summary of a finished research run.
///
/// The well-known fields are lifted out when they have the expected type;
/// every other key, including known keys with an unexpected type, stays in
/// [`extra`](Self::extra) in its original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CompletionResult {
    /// Directory the run wrote its artifacts to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Number of papers the literature analysis covered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub papers_analyzed: Option<u64>,
    /// Number of hypotheses produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypotheses_generated: Option<u64>,
    /// Number of simulation scripts produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulations_created: Option<u64>,
    /// Remaining keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for CompletionResult {
    fn from(map: Map<String, Value>) -> Self {
        let mut result = Self::default();
        for (key, value) in map {
            let leftover = match key.as_str() {
                "output_path" => take_string(&mut result.output_path, value),
                "papers_analyzed" => take_count(&mut result.papers_analyzed, value),
                "hypotheses_generated" => take_count(&mut result.hypotheses_generated, value),
                "simulations_created" => take_count(&mut result.simulations_created, value),
                _ => Some(value),
            };
            if let Some(value) = leftover {
                result.extra.insert(key, value);
            }
        }
        result
    }
}

fn take_string(slot: &mut Option<String>, value: Value) -> Option<Value> {
    match value {
        Value::String(text) => {
            *slot = Some(text);
            None
        },
        other => Some(other),
    }
}

fn take_count(slot: &mut Option<u64>, value: Value) -> Option<Value> {
    match value.as_u64() {
        Some(count) => {
            *slot = Some(count);
            None
        },
        None => Some(value),
    }
}

impl CompletionResult {
    /// True when the record carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.output_path.is_none()
            && self.papers_analyzed.is_none()
            && self.hypotheses_generated.is_none()
            && self.simulations_created.is_none()
            && self.extra.is_empty()
    }
}
