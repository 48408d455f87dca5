use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::models::{ApiResponse, BookingRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("booking rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> Result<Acknowledgment, SubmissionError>;
}

pub struct BookingClient {
    endpoint: String,
    client: reqwest::Client,
}

impl BookingClient {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { endpoint, client })
    }

    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        Self::new(config.endpoint_url.clone(), config.submit_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BookingSubmitter for BookingClient {
    async fn submit(&self, request: &BookingRequest) -> Result<Acknowledgment, SubmissionError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::Network("request timed out".to_string())
                } else {
                    SubmissionError::Network(e.to_string())
                }
            })?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SubmissionError::Network(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiResponse>(&body)
                .map(|r| r.message)
                .unwrap_or(body);
            return Err(SubmissionError::Network(format!(
                "booking endpoint returned {status}: {detail}"
            )));
        }

        let parsed: ApiResponse = serde_json::from_str(&body).map_err(|e| {
            SubmissionError::Network(format!("malformed response ({status}): {e}"))
        })?;

        if parsed.success {
            Ok(Acknowledgment {
                message: parsed.message,
            })
        } else {
            Err(SubmissionError::Rejected(parsed.message))
        }
    }
}
