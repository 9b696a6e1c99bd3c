use serde::{Deserialize, Serialize};

use crate::Source;

const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix mounted in front of the prediction routes
    pub api_prefix: String,
    /// CORS origins; `*` allows any
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
    pub max_payload_bytes: usize,
}

impl ServerConfig {
    pub(crate) fn from_source<F>(source: &Source<F>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = source
            .string_or("ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let allow_credentials = source
            .get("ALLOW_CREDENTIALS")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Self {
            host: source.string_or("HOST", "0.0.0.0"),
            port: source.parse_or("PORT", 8000),
            api_prefix: normalize_prefix(&source.string_or("API_PREFIX", "/api/v1")),
            allowed_origins,
            allow_credentials,
            max_payload_bytes: source.parse_or("MAX_PAYLOAD_BYTES", DEFAULT_MAX_PAYLOAD_BYTES),
        }
    }

    /// Any-origin CORS requested
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn predict_path(&self) -> String {
        format!("{}/predict", normalize_prefix(&self.api_prefix))
    }

    pub fn health_path(&self) -> String {
        format!("{}/health", normalize_prefix(&self.api_prefix))
    }
}

/// Give the prefix exactly one leading `/` and no trailing one; an empty or
/// root prefix mounts the API routes at the top level.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_source(&Source::new(|_: &str| None))
    }
}
