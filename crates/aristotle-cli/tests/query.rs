#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::aristotle_at;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FACT_RESPONSE: &str = "\
Verdict: Contradicted
Confidence: 85%
Rationale: Two replications failed.
Scaling alone does not explain it.
Citations:
1) Deep Sets (2017) — https://arxiv.org/abs/1703.06114";

async fn mock_query(server: &MockServer, query: &str, response: &str) {
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_json(json!({
            "query": query,
            "command": query.trim_start_matches('/').split_whitespace().next().unwrap()
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": response,
            "query": query
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_default_command_formats_fact_check() -> anyhow::Result<()> {
    // Given: A service answering a fact check
    let server = MockServer::start().await;
    mock_query(&server, "/fact sparse attention scales", FACT_RESPONSE).await;

    // When: Submitting it as the default command
    // Then: The verdict, rationale and citation are laid out
    aristotle_at(&server.uri())
        .args(["/fact", "sparse", "attention", "scales"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fact check"))
        .stdout(predicate::str::contains("Verdict: Contradicted"))
        .stdout(predicate::str::contains("Confidence: 85%"))
        .stdout(predicate::str::contains("Scaling alone does not explain it."))
        .stdout(predicate::str::contains(
            "1) Deep Sets (2017) <https://arxiv.org/abs/1703.06114>",
        ));
    Ok(())
}

#[tokio::test]
async fn test_query_json_output() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mock_query(&server, "/factpaper 1234", "Paper: X\nClaims:\n  1. y").await;

    let stdout = aristotle_at(&server.uri())
        .args(["query", "/factpaper 1234", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let payload: Value = serde_json::from_slice(&stdout)?;

    assert_eq!(payload["command"], "factpaper");
    assert_eq!(payload["blocks"][0]["type"], "preformatted");
    assert_eq!(payload["blocks"][0]["text"], "Paper: X\nClaims:\n  1. y");
    Ok(())
}

#[tokio::test]
async fn test_query_html_output_is_escaped() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mock_query(&server, "/factpaper 1", "<script>alert(1)</script>").await;

    aristotle_at(&server.uri())
        .args(["query", "/factpaper 1", "-f", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;"))
        .stdout(predicate::str::contains("<script>").not());
    Ok(())
}

#[tokio::test]
async fn test_plain_question_is_sent_without_command() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .and(body_json(json!({"query": "what is attention"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "It is a **weighting** mechanism."
        })))
        .expect(1)
        .mount(&server)
        .await;

    aristotle_at(&server.uri())
        .args(["what", "is", "attention"])
        .assert()
        .success()
        .stdout(predicate::str::contains("It is a weighting mechanism."));
    Ok(())
}

#[tokio::test]
async fn test_server_error_exits_with_network_code() -> anyhow::Result<()> {
    // Given: A failing service
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    // Then: Exit code 5 and the status in the message, with no retry
    aristotle_at(&server.uri())
        .args(["/audit", "10"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("500"));
    Ok(())
}
