use std::time::Duration;

use reqwest::StatusCode;
use senti_types::{ErrorResponse, HealthResponse, SentimentRequest, SentimentResponse};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("server answered {status}: {}", describe(.body))]
    Status { status: StatusCode, body: String },

    #[error("cannot reach the sentiment service: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("sentiment service timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl ClientError {
    /// Status of a non-2xx answer
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout(e)
        } else if e.is_connect() {
            ClientError::Connect(e)
        } else if e.is_decode() {
            ClientError::Decode(e)
        } else {
            ClientError::Request(e)
        }
    }
}

/// Render an error body, preferring the service's `{error, detail}` shape.
fn describe(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error,
            detail: Some(detail),
        }) => format!("{error} ({detail})"),
        Ok(ErrorResponse { error, detail: None }) => error,
        Err(_) => body.to_string(),
    }
}

#[derive(Clone)]
pub struct SentimentClient {
    base_url: String,
    api_prefix: String,
    client: reqwest::Client,
}

impl SentimentClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_prefix: "/api/v1".to_string(),
            client,
        })
    }

    /// Target a service mounted under a different API prefix
    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    /// Classify one review
    pub async fn predict(&self, text: &str) -> Result<SentimentResponse, ClientError> {
        let url = format!("{}{}/predict", self.base_url, self.api_prefix);
        tracing::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(&SentimentRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Service-wide health
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}
