use serde::{Deserialize, Serialize};

use crate::Source;

/// Names and versions reported by the informational endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub version: String,
    pub environment: String,
}

impl AppInfo {
    pub(crate) fn from_source<F>(source: &Source<F>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = source
            .get("APP_VERSION")
            .or_else(|| source.get("API_VERSION"))
            .unwrap_or_else(|| "1.0.0".to_string());

        Self {
            name: source.string_or("APP_NAME", "Sentiment Analysis API"),
            title: source.string_or("API_TITLE", "Sentiment Analysis API"),
            description: source
                .string_or("API_DESCRIPTION", "LSTM-based sentiment analysis for text"),
            version,
            environment: source.string_or("ENVIRONMENT", "development"),
        }
    }
}
