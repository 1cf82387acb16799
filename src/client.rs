// src/client.rs
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, FetchError};
use crate::types::{BasicCtLogInfo, CtLog, Stats, Sth};

/// Status and body of one completed HTTP exchange
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Transport capability injected into [`ApiClient`].
///
/// Implementations own timeouts and cancellation; test doubles implement
/// this without touching the network.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Production transport backed by reqwest
pub struct ReqwestFetch {
    http_client: reqwest::Client,
}

impl ReqwestFetch {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_reqwest_error)?;

        Ok(HttpResponse { status, body })
    }
}

/// Connection-level failures mean the backend was never reached, so the
/// error is reported as "offline" rather than echoing transport internals.
fn classify_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_connect() {
        FetchError::offline(e)
    } else {
        FetchError::new(e)
    }
}

// RFC 3986 unreserved characters pass through, everything else is
// percent-encoded. Identifiers containing '/', '?' or spaces stay safe
// when interpolated into a path.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Typed client for the dashboard backend API
pub struct ApiClient {
    base_url: String,
    fetch: Box<dyn HttpFetch>,
}

impl ApiClient {
    /// Create a client against `base_url` (no trailing slash) using the
    /// given transport.
    pub fn new(base_url: impl Into<String>, fetch: Box<dyn HttpFetch>) -> Self {
        Self {
            base_url: base_url.into(),
            fetch,
        }
    }

    /// GET `base_url + path` and decode the body as JSON.
    ///
    /// A 200 response is decoded with no further validation; any other
    /// status becomes [`ApiError::Server`] carrying the body verbatim.
    /// Transport failures and undecodable 200 bodies become
    /// [`ApiError::Transport`].
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        debug!("GET {}", url);

        let response = self.fetch.get(&url).await?;

        if response.status != 200 {
            return Err(ApiError::Server {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Transport(FetchError::new(e)))
    }

    /// Counts of monitored and known logs
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.fetch_json("/stats").await
    }

    /// Listing of logs with their latest tree head, ordered by the backend
    pub async fn ctlogs(&self, include_retired: bool) -> Result<Vec<BasicCtLogInfo>, ApiError> {
        self.fetch_json(&format!("/ctlogs?include_retired={}", include_retired))
            .await
    }

    /// Full detail for one log
    pub async fn log(&self, id: &str) -> Result<CtLog, ApiError> {
        self.fetch_json(&format!("/log/{}", encode_segment(id))).await
    }

    /// Full detail for one signed tree head of a log
    pub async fn sth(&self, log_id: &str, sth_id: i64) -> Result<Sth, ApiError> {
        self.fetch_json(&format!("/log/{}/sth/{}", encode_segment(log_id), sth_id))
            .await
    }
}
