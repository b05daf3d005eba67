//! HTTP implementation of the session API.
//!
//! Talks to the console backend's REST surface:
//!
//! - `GET {base}/api/sessions` - session summaries
//! - `GET {base}/api/sessions/{id}` - one stored session
//! - `GET {base}/api/sessions/{id}/traces` - ordered trace ids
//!
//! A 404 on the session resource maps to `Ok(None)`; everything else
//! surfaces as a typed error for the caller to handle.

use crate::config::ClientConfig;
use agentdesk_core::error::{AgentdeskError, Result};
use agentdesk_core::session::{SessionApi, SessionRecord, SessionSummary};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Session API client backed by reqwest.
#[derive(Clone)]
pub struct HttpSessionApi {
    client: Client,
    config: ClientConfig,
}

/// Envelope for the trace listing endpoint.
///
/// The backend wraps the list in an object; a bare array is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TraceListResponse {
    Wrapped { trace_ids: Vec<String> },
    Bare(Vec<String>),
}

impl TraceListResponse {
    fn into_trace_ids(self) -> Vec<String> {
        match self {
            Self::Wrapped { trace_ids } => trace_ids,
            Self::Bare(trace_ids) => trace_ids,
        }
    }
}

/// Envelope for the session listing endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SessionListResponse {
    Wrapped { sessions: Vec<SessionSummary> },
    Bare(Vec<SessionSummary>),
}

impl SessionListResponse {
    fn into_sessions(self) -> Vec<SessionSummary> {
        match self {
            Self::Wrapped { sessions } => sessions,
            Self::Bare(sessions) => sessions,
        }
    }
}

impl HttpSessionApi {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AgentdeskError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Creates a new client configured from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `AGENTDESK_BASE_URL` is missing or invalid.
    pub fn try_from_env() -> Result<Self> {
        Self::new(ClientConfig::try_from_env()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }
        request
    }

    /// Maps a non-success status to a typed error.
    fn check_status(url: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(AgentdeskError::http(
                Some(status.as_u16()),
                format!("GET {} returned {}", url, status),
            ));
        }
        Ok(response)
    }
}

#[async_trait]
impl SessionApi for HttpSessionApi {
    async fn get_session(&self, session_id: &str) -> Result<Option<SessionRecord>> {
        let url = self.url(&format!("api/sessions/{}", session_id));
        tracing::debug!("Fetching session '{}'", session_id);

        let response = self.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check_status(&url, response)?;

        let record = response.json::<SessionRecord>().await?;
        Ok(Some(record))
    }

    async fn get_session_trace_ids(&self, session_id: &str) -> Result<Vec<String>> {
        let url = self.url(&format!("api/sessions/{}/traces", session_id));
        tracing::debug!("Fetching trace ids for session '{}'", session_id);

        let response = self.get(&url).send().await?;
        let response = Self::check_status(&url, response)?;

        let listing = response.json::<TraceListResponse>().await?;
        Ok(listing.into_trace_ids())
    }

    async fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
        let url = self.url("api/sessions");
        tracing::debug!("Listing sessions");

        let response = self.get(&url).send().await?;
        let response = Self::check_status(&url, response)?;

        let listing = response.json::<SessionListResponse>().await?;
        Ok(listing.into_sessions())
    }
}
