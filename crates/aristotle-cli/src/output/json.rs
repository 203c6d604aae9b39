//! JSON output formatting

use aristotle_core::{
    Block, CompletionResult, HealthStatus, LogEntry, Phase, ResearchSession, StructuredDocument,
};
use serde::Serialize;

/// Payload printed by `aristotle query --format json`.
#[derive(Debug, Serialize)]
pub struct QueryOutput<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
    pub response: &'a str,
    pub blocks: &'a [Block],
}

/// Payload printed by `aristotle research --format json` once the stream ends.
#[derive(Debug, Serialize)]
pub struct ResearchOutput<'a> {
    pub topic: &'a str,
    pub status: &'static str,
    pub percent: u8,
    pub log: &'a [LogEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a CompletionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<&'a [Block]>,
}

impl<'a> ResearchOutput<'a> {
    /// Snapshot of a session after its stream was pumped.
    pub fn from_session(session: &'a ResearchSession) -> Self {
        Self {
            topic: session.topic(),
            status: phase_name(session.phase()),
            percent: session.percent(),
            log: session.log_entries(),
            result: session.result(),
            blocks: session.document().map(StructuredDocument::blocks),
        }
    }
}

/// Stable lowercase name of a session phase.
pub const fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Running => "running",
        Phase::Completed => "completed",
        Phase::Failed => "failed",
        Phase::Incomplete => "incomplete",
        Phase::Cancelled => "cancelled",
    }
}

/// Payload printed by `aristotle health --format json`.
#[derive(Debug, Serialize)]
pub struct HealthOutput<'a> {
    pub url: &'a str,
    pub healthy: bool,
    #[serde(flatten)]
    pub status: &'a HealthStatus,
}

/// Pretty-print a payload to stdout.
pub fn print<T: Serialize>(payload: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use aristotle_core::StreamEvent;
    use chrono::Local;
    use serde_json::json;

    #[test]
    fn test_query_payload_shape() {
        let blocks = [Block::row("Verdict", "Supported")];
        let payload = QueryOutput {
            query: "/fact x",
            command: Some("fact"),
            response: "Verdict: Supported",
            blocks: &blocks,
        };

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["command"], "fact");
        assert_eq!(
            value["blocks"][0],
            json!({
                "type": "key_value_row",
                "label": "Verdict",
                "value": "Supported",
                "emphasis": null,
                "indent": 0
            })
        );
    }

    #[test]
    fn test_research_payload_from_completed_session() {
        // Given: A session that received its complete event
        let mut session = ResearchSession::new();
        session.start("solar");
        let result = CompletionResult {
            papers_analyzed: Some(4),
            ..CompletionResult::default()
        };
        session.handle(StreamEvent::Complete { result }, Local::now());

        // When: Serialising the snapshot
        let value = serde_json::to_value(ResearchOutput::from_session(&session)).unwrap();

        // Then: Status, result and formatted blocks are present
        assert_eq!(value["topic"], "solar");
        assert_eq!(value["status"], "completed");
        assert_eq!(value["result"]["papers_analyzed"], 4);
        assert_eq!(value["log"][0]["kind"], "success");
        assert!(value["blocks"].as_array().is_some_and(|b| !b.is_empty()));
    }

    #[test]
    fn test_incomplete_session_has_no_result() {
        let mut session = ResearchSession::new();
        session.start("solar");
        session.finish(Local::now());

        let value = serde_json::to_value(ResearchOutput::from_session(&session)).unwrap();

        assert_eq!(value["status"], "incomplete");
        assert!(value.get("result").is_none());
        assert!(value.get("blocks").is_none());
    }
}
