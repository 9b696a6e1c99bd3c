use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use senti_config::model::ModelConfig;
use senti_core::{SentimentClassifier, Tokenizer, TokenizerError};
use senti_model::{ModelError, RemoteModel, SequenceModel};

/// Whether the classifier can serve predictions.
///
/// Built once at startup. A failed initialization leaves the service in
/// `Uninitialized` and every prediction is refused with "not ready".
pub enum ModelLifecycle {
    Uninitialized {
        reason: String,
        tokenizer_loaded: bool,
    },
    Ready(Arc<SentimentClassifier>),
}

impl ModelLifecycle {
    /// Load the tokenizer and connect the configured model.
    pub fn initialize(config: &ModelConfig) -> Self {
        let tokenizer =
            match Tokenizer::load_or_create(Path::new(&config.tokenizer_path), config.num_words) {
                Ok(tokenizer) => tokenizer,
                Err(e) => return Self::failed(InitError::from(e), false),
            };

        let model = match remote_model(config) {
            Ok(model) => model,
            Err(e) => return Self::failed(e, true),
        };

        let classifier = SentimentClassifier::new(tokenizer, model, config.maxlen);
        let metadata = classifier.model().metadata();
        tracing::info!(
            "Sentiment model initialized: {} at {} ({} words, maxlen {})",
            metadata.name,
            metadata.endpoint.as_deref().unwrap_or("-"),
            classifier.tokenizer().vocabulary_size(),
            classifier.maxlen()
        );

        Self::ready(classifier)
    }

    pub fn ready(classifier: SentimentClassifier) -> Self {
        ModelLifecycle::Ready(Arc::new(classifier))
    }

    pub fn uninitialized(reason: impl Into<String>) -> Self {
        ModelLifecycle::Uninitialized {
            reason: reason.into(),
            tokenizer_loaded: false,
        }
    }

    fn failed(error: InitError, tokenizer_loaded: bool) -> Self {
        tracing::error!("Failed to initialize model: {error}");
        tracing::warn!("App will start without model initialization");

        ModelLifecycle::Uninitialized {
            reason: error.to_string(),
            tokenizer_loaded,
        }
    }

    pub fn classifier(&self) -> Option<&Arc<SentimentClassifier>> {
        match self {
            ModelLifecycle::Ready(classifier) => Some(classifier),
            ModelLifecycle::Uninitialized { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelLifecycle::Ready(_))
    }

    pub fn tokenizer_loaded(&self) -> bool {
        match self {
            ModelLifecycle::Ready(_) => true,
            ModelLifecycle::Uninitialized {
                tokenizer_loaded, ..
            } => *tokenizer_loaded,
        }
    }

    /// Why predictions are refused, if they are
    pub fn reason(&self) -> Option<&str> {
        match self {
            ModelLifecycle::Ready(_) => None,
            ModelLifecycle::Uninitialized { reason, .. } => Some(reason),
        }
    }
}

fn remote_model(config: &ModelConfig) -> Result<Arc<dyn SequenceModel>, InitError> {
    let url = config.url.clone().ok_or(InitError::MissingModelUrl)?;
    let model = RemoteModel::new(url, Duration::from_secs(config.timeout_seconds))?;
    Ok(Arc::new(model))
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Tokenizer unavailable: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Model unavailable: {0}")]
    Model(#[from] ModelError),

    #[error("No model endpoint configured (set MODEL_URL)")]
    MissingModelUrl,
}
