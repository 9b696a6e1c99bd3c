use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::{ModelError, ModelMetadata, SequenceModel, check_probability};

/// Client for a TensorFlow-Serving style REST predict endpoint.
#[derive(Clone)]
pub struct RemoteModel {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: [&'a [u32]; 1],
}

impl RemoteModel {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, ModelError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }
}

#[async_trait]
impl SequenceModel for RemoteModel {
    async fn predict(&self, sequence: &[u32]) -> Result<f32, ModelError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&PredictRequest {
                instances: [sequence],
            })
            .send()
            .await?;

        if response.status() == 429 {
            return Err(ModelError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(ModelError::ApiError(format!("HTTP {}", response.status())));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ModelError::ApiError(format!("Failed to parse response: {}", e)))?;

        let probability = json["predictions"]
            .get(0)
            .and_then(|p| p.get(0).or(Some(p)))
            .and_then(|p| p.as_f64())
            .ok_or_else(|| ModelError::ApiError("No prediction in response".to_string()))?;

        tracing::debug!("Model scored {} ids: {}", sequence.len(), probability);

        check_probability(probability as f32)
    }

    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            name: "remote".to_string(),
            endpoint: Some(self.api_url.clone()),
        }
    }
}
