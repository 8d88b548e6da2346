//! HTTP client and request orchestration for the classification endpoint.
//!
//! One analyze action is exactly one request: a bounded wait, no retries.
//! The four failure kinds the caller must branch on are distinguished here
//! so each gets its own user-visible message.

use std::time::{Duration, Instant};

use sentiscope_api::Classification;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::session::Session;

/// Bounded wait for a single classification call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const READY_POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The endpoint is alive but did not answer within the timeout.
    #[error("request timed out")]
    Timeout,

    /// The endpoint is unreachable (refused, not yet started).
    #[error("endpoint unreachable: {0}")]
    Connection(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {0}")]
    Status(u16),

    /// Any other transport failure; surfaced, never swallowed.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct Health {
    pub status: String,
    pub model: String,
}

impl Health {
    pub fn is_degraded(&self) -> bool {
        self.model == "degraded"
    }
}

fn map_request_error(e: reqwest::Error) -> ClassifyError {
    // Timeout first: a connect that times out is a timeout, not a
    // connection failure.
    if e.is_timeout() {
        ClassifyError::Timeout
    } else if e.is_connect() {
        ClassifyError::Connection(e)
    } else {
        ClassifyError::Transport(e)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One classification attempt for one analyze action.
    pub async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let response = self
            .http
            .post(format!("{}/predict", self.base_url))
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        response.json::<Classification>().await.map_err(map_request_error)
    }

    pub async fn health(&self) -> Result<Health, ClassifyError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        response.json::<Health>().await.map_err(map_request_error)
    }

    /// Startup readiness probe: polls the health route until the endpoint
    /// answers or the deadline passes. Returns `None` if it never became
    /// reachable; callers fall back to the connection-failure flow on the
    /// first analyze action.
    pub async fn wait_ready(&self, deadline: Duration) -> Option<Health> {
        let start = Instant::now();
        loop {
            if let Ok(health) = self.health().await {
                return Some(health);
            }
            if start.elapsed() >= deadline {
                return None;
            }
            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
    }
}

/// Outcome of one user-initiated analyze action.
#[derive(Debug)]
pub enum AnalyzeOutcome {
    /// Input was empty after trimming; no request was issued.
    EmptyInput,
    Classified(Classification),
    Failed(ClassifyError),
}

/// Runs one analyze action against the session: guard empty input locally,
/// issue exactly one request, and append to the history only on success.
pub async fn analyze(client: &ApiClient, session: &mut Session, input: &str) -> AnalyzeOutcome {
    if input.trim().is_empty() {
        return AnalyzeOutcome::EmptyInput;
    }
    session.current_text = input.to_string();

    match client.classify(input).await {
        Ok(classification) => {
            session.record(input, &classification);
            AnalyzeOutcome::Classified(classification)
        }
        Err(err) => AnalyzeOutcome::Failed(err),
    }
}
