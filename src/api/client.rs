//! Trip Mate API client

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::config::parse_endpoint;
use crate::error::{Result, TripMateError};

/// Path of the query endpoint, relative to the base URL
const QUERY_PATH: &str = "query";

/// Path of the health endpoint, relative to the base URL
const HEALTH_PATH: &str = "health";

/// Something that can answer a trip-planning query with markup text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Submit one query and return the answer's markup source
    async fn ask(&self, query: &str) -> Result<String>;
}

/// HTTP client for a Trip Mate server
#[derive(Debug, Clone)]
pub struct TripMateClient {
    client: Client,
    endpoint: Url,
}

impl TripMateClient {
    /// Create a client for the given base URL
    pub fn new(endpoint: Url) -> Self {
        // Re-normalise in case the caller built the Url by hand
        let endpoint = parse_endpoint(endpoint.as_str()).unwrap_or(endpoint);
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Base URL this client talks to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.endpoint.join(path)?)
    }

    /// POST a query and return the `answer` field
    pub async fn ask(&self, query: &str) -> Result<String> {
        let url = self.url(QUERY_PATH)?;
        tracing::debug!(%url, len = query.len(), "submitting query");

        let response = self
            .client
            .post(url)
            .json(&QueryRequest { query })
            .send()
            .await?;

        let answer: QueryAnswer = ensure_success(response)?.json().await?;
        tracing::debug!(len = answer.answer.len(), "answer received");
        Ok(answer.answer)
    }

    /// GET the server health status
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.url(HEALTH_PATH)?;
        tracing::debug!(%url, "checking health");

        let response = self.client.get(url).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }
}

#[async_trait]
impl QueryBackend for TripMateClient {
    async fn ask(&self, query: &str) -> Result<String> {
        TripMateClient::ask(self, query).await
    }
}

/// Turn any non-2xx status into a request failure carrying the code
fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(status = status.as_u16(), "server returned an error status");
        Err(TripMateError::RequestFailed(format!(
            "Server Error: {}",
            status.as_u16()
        )))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request/Response types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryAnswer {
    answer: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    /// Reported status, `ok` when the server is up
    pub status: String,
}

impl HealthStatus {
    /// Whether the server reports itself as healthy
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
