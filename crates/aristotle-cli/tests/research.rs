#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::aristotle_at;
use predicates::prelude::*;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETE_STREAM: &str = "\
data: {\"type\":\"stage\",\"message\":\"Analyzing literature\",\"percent\":10}
[INFO] Fetched 20 papers
data: {\"type\":\"progress\",\"percent\":60}
data: {\"type\":\"complete\",\"result\":{\"papers_analyzed\":20,\"hypotheses_generated\":3,\"simulations_created\":3,\"output_path\":\"research_output/solar\"}}
";

async fn mock_research(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/research"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(body),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_research_streams_log_and_prints_summary() -> anyhow::Result<()> {
    // Given: A service streaming a complete run
    let server = MockServer::start().await;
    mock_research(&server, COMPLETE_STREAM).await;

    // When: Running research with text output
    // Then: Log lines go to stderr and the summary to stdout
    aristotle_at(&server.uri())
        .args(["research", "perovskite", "solar", "cells"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Analyzing literature"))
        .stderr(predicate::str::contains("[INFO] Fetched 20 papers"))
        .stderr(predicate::str::contains("Research completed"))
        .stdout(predicate::str::contains("Research complete"))
        .stdout(predicate::str::contains("Papers analyzed: 20"))
        .stdout(predicate::str::contains("Output path: research_output/solar"));
    Ok(())
}

#[tokio::test]
async fn test_research_json_payload() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mock_research(&server, COMPLETE_STREAM).await;

    let stdout = aristotle_at(&server.uri())
        .args(["research", "solar", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let payload: Value = serde_json::from_slice(&stdout)?;

    assert_eq!(payload["topic"], "solar");
    assert_eq!(payload["status"], "completed");
    assert_eq!(payload["percent"], 60);
    assert_eq!(payload["result"]["hypotheses_generated"], 3);
    assert_eq!(payload["log"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn test_stream_without_completion_is_a_warning() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mock_research(&server, "data: {\"type\":\"progress\",\"percent\":40}\n").await;

    aristotle_at(&server.uri())
        .args(["research", "solar"])
        .assert()
        .success()
        .stderr(predicate::str::contains("stream ended before completion"));
    Ok(())
}

#[tokio::test]
async fn test_research_http_error_is_logged_once() -> anyhow::Result<()> {
    // Given: A service rejecting the research request
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/research"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    // Then: The failure shows up as an error log entry, not a second message
    aristotle_at(&server.uri())
        .args(["research", "solar"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("❌ Request failed with HTTP status 503"))
        .stderr(predicate::str::contains("error:").not());
    Ok(())
}
