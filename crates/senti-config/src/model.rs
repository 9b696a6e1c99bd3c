use serde::{Deserialize, Serialize};

use crate::Source;

fn default_tokenizer_path() -> String {
    "models/tokenizer.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Predict endpoint of the served network; the service stays not ready
    /// without one
    pub url: Option<String>,
    pub timeout_seconds: u64,
    pub tokenizer_path: String,
    /// Length every id sequence is padded or truncated to
    pub maxlen: usize,
    /// Vocabulary ids at or above this are dropped
    pub num_words: usize,
}

impl ModelConfig {
    pub(crate) fn from_source<F>(source: &Source<F>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: source.get("MODEL_URL").filter(|url| !url.trim().is_empty()),
            timeout_seconds: source.parse_or("MODEL_TIMEOUT_SECONDS", 30),
            tokenizer_path: source.string_or("TOKENIZER_PATH", &default_tokenizer_path()),
            maxlen: source.parse_or("MAX_SEQUENCE_LEN", 200),
            num_words: source.parse_or("NUM_WORDS", 5000),
        }
    }
}
