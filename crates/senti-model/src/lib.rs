mod remote;

pub use remote::RemoteModel;

/// Sequence classifier interface.
///
/// Takes a fixed-length id sequence and returns the network's sigmoid output
/// in `[0, 1]`. Scores above one half read as negative.
#[async_trait::async_trait]
pub trait SequenceModel: Send + Sync {
    /// Score one padded sequence
    async fn predict(&self, sequence: &[u32]) -> Result<f32, ModelError>;

    /// Provider metadata
    fn metadata(&self) -> ModelMetadata;
}

#[derive(Debug, Clone)]
pub struct ModelMetadata {
    pub name: String,
    pub endpoint: Option<String>,
}

/// Reject scores the label rule cannot interpret.
pub fn check_probability(probability: f32) -> Result<f32, ModelError> {
    if probability.is_finite() && (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(ModelError::InvalidOutput(probability))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Model returned an invalid probability: {0}")]
    InvalidOutput(f32),
}
