use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_TEXT_CHARS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SentimentRequest {
    /// Text to analyze for sentiment
    #[validate(length(min = 1, max = MAX_TEXT_CHARS, message = "text must be 1 to 10000 characters"))]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResponse {
    /// Predicted sentiment
    pub sentiment: SentimentLabel,
    /// Confidence in the predicted label, in [0, 1]
    pub confidence: f64,
    /// Raw model probability, in [0, 1]
    pub probability: f64,
    /// Preprocessed text that was analyzed
    pub processed_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Service-wide health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub tokenizer_loaded: bool,
    pub environment: String,
}

/// Health report under the API prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub predict: String,
    pub health: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResponse {
    pub message: String,
    pub timestamp: String,
    pub version: String,
}
