use serde::{Deserialize, Serialize};

use crate::Source;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level name, case-insensitive (`RUST_LOG` takes precedence when set)
    pub level: String,
    /// Emit JSON lines instead of the human format
    pub json: bool,
}

impl LogConfig {
    pub(crate) fn from_source<F>(source: &Source<F>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: source.string_or("LOG_LEVEL", "INFO"),
            json: source
                .get("LOG_FORMAT")
                .is_some_and(|f| f.trim().eq_ignore_ascii_case("json")),
        }
    }
}
