use std::sync::Arc;

use senti_config::Config;
use senti_core::{DefaultPreprocessor, Preprocessor};

use crate::status::ModelLifecycle;

/// Everything a request handler needs, injected through axum state.
pub struct AppState {
    pub config: Arc<Config>,
    pub lifecycle: ModelLifecycle,
    pub preprocessor: Arc<dyn Preprocessor>,
}

impl AppState {
    pub fn new(config: Config, lifecycle: ModelLifecycle) -> Self {
        Self {
            config: Arc::new(config),
            lifecycle,
            preprocessor: Arc::new(DefaultPreprocessor),
        }
    }

    /// Run model initialization against the configured artifacts.
    pub fn initialize(config: Config) -> Self {
        let lifecycle = ModelLifecycle::initialize(&config.model);
        Self::new(config, lifecycle)
    }
}
