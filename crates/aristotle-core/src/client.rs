//! HTTP client for the research-assistant service.
//!
//! Three endpoints are used:
//!
//! - `POST /query` with `{"query": ...}` returns one JSON payload
//! - `POST /research` with `{"topic": ...}` returns a chunked event stream
//! - `GET /health` returns `{"status": ..., "message": ...}`
//!
//! Failed requests are reported once and never retried.

use crate::command::CommandInvocation;
use crate::config::ApiConfig;
use crate::{Error, Result};
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'static str>,
}

/// Body of `POST /research`.
#[derive(Debug, Clone, Serialize)]
struct ResearchRequest<'a> {
    topic: &'a str,
}

/// Reply of `POST /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReply {
    /// Raw response text, formatted client-side
    pub response: String,
    /// Query echoed back by the service
    #[serde(default)]
    pub query: Option<String>,
    /// Command echoed back by the service
    #[serde(default)]
    pub command: Option<String>,
}

/// Reply of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"healthy"` when the service is up
    pub status: String,
    /// Human-readable detail
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    /// Whether the service reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Client for one service base URL.
#[derive(Debug, Clone)]
pub struct AristotleClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl AristotleClient {
    /// Build a client from the API settings.
    ///
    /// Only the connect timeout is set on the underlying client. The request
    /// timeout is applied per request so research streams can run longer.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut base_url = Url::parse(config.base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!(
                "'{}' cannot be used as a base URL",
                config.base_url
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!("aristotle/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url,
            timeout: config.timeout(),
        })
    }

    /// Base URL requests are joined onto, always ending in `/`.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submit a query or slash command and return the raw reply.
    pub async fn query(&self, query: &str) -> Result<QueryReply> {
        let invocation = CommandInvocation::parse(query);
        let body = QueryRequest {
            query,
            command: invocation.command.map(|tag| tag.as_str()),
        };
        let url = self.endpoint("query")?;
        debug!("POST {url}");

        let request = self.client.post(url).json(&body).timeout(self.timeout);
        let response = send(request).await?;
        let reply = response.json::<QueryReply>().await.map_err(decode_error)?;
        info!(command = ?body.command, "Query answered");
        Ok(reply)
    }

    /// Start a research run and return its body as a byte stream.
    ///
    /// The stream is not bounded by the request timeout.
    pub async fn research(&self, topic: &str) -> Result<BoxStream<'static, Result<Bytes>>> {
        let url = self.endpoint("research")?;
        debug!("POST {url}");

        let request = self.client.post(url).json(&ResearchRequest { topic });
        let response = send(request).await?;
        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(Error::from))
            .boxed())
    }

    /// Ask the service whether it is up.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("health")?;
        debug!("GET {url}");

        let response = send(self.client.get(url).timeout(self.timeout)).await?;
        response.json::<HealthStatus>().await.map_err(decode_error)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        debug!(status = status.as_u16(), "Request failed");
        return Err(Error::HttpStatus {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// A body that arrived but did not match the expected shape is a
/// serialization failure, not a transport one.
fn decode_error(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::Serialization(err.to_string())
    } else {
        Error::Transport(err)
    }
}
