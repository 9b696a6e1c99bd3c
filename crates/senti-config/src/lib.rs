use std::cell::RefCell;
use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::app::AppInfo;
use self::logging::LogConfig;
use self::model::ModelConfig;
use self::server::ServerConfig;

pub mod app;
pub mod logging;
pub mod model;
pub mod server;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub app: AppInfo,
    pub logging: LogConfig,
    /// Values that were set but could not be parsed; defaults were used
    #[serde(skip)]
    pub invalid: Vec<InvalidValue>,
}

/// A configured value that was discarded in favor of its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidValue {
    pub key: String,
    pub value: String,
}

impl Config {
    /// Read every section from the process environment.
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults for
    /// missing or unparsable values.
    ///
    /// Usually runs before logging is up, so discarded values are kept in
    /// [`Config::invalid`] and reported by [`Config::warn_invalid`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = Source::new(lookup);

        let server = ServerConfig::from_source(&source);
        let model = ModelConfig::from_source(&source);
        let app = AppInfo::from_source(&source);
        let logging = LogConfig::from_source(&source);

        Config {
            server,
            model,
            app,
            logging,
            invalid: source.into_rejected(),
        }
    }

    pub fn warn_invalid(&self) {
        for InvalidValue { key, value } in &self.invalid {
            tracing::warn!("Ignoring invalid {key}={value:?}, using the default");
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Key lookup that remembers the values it had to discard.
pub(crate) struct Source<F> {
    lookup: F,
    rejected: RefCell<Vec<InvalidValue>>,
}

impl<F> Source<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub(crate) fn new(lookup: F) -> Self {
        Self {
            lookup,
            rejected: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
    }

    /// Parse `key` or fall back to `default`, recording bad input.
    pub(crate) fn parse_or<T: FromStr>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.get(key) else {
            return default;
        };

        match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                self.rejected.borrow_mut().push(InvalidValue {
                    key: key.to_string(),
                    value: raw,
                });
                default
            }
        }
    }

    pub(crate) fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn into_rejected(self) -> Vec<InvalidValue> {
        self.rejected.into_inner()
    }
}
