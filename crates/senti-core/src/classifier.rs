use std::sync::Arc;

use senti_model::{ModelError, SequenceModel};
pub use senti_types::SentimentLabel;

use crate::tokenizer::{Tokenizer, pad_sequence};

pub const DEFAULT_MAXLEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: SentimentLabel,
    pub confidence: f64,
    pub probability: f64,
}

impl Prediction {
    /// Scores above one half are read as negative, as the served model was
    /// trained with that label polarity.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.5 {
            Self {
                label: SentimentLabel::Negative,
                confidence: probability,
                probability,
            }
        } else {
            Self {
                label: SentimentLabel::Positive,
                confidence: 1.0 - probability,
                probability,
            }
        }
    }
}

/// Tokenizer plus black-box model: normalized text in, labelled score out.
pub struct SentimentClassifier {
    tokenizer: Tokenizer,
    model: Arc<dyn SequenceModel>,
    maxlen: usize,
}

impl SentimentClassifier {
    pub fn new(tokenizer: Tokenizer, model: Arc<dyn SequenceModel>, maxlen: usize) -> Self {
        Self {
            tokenizer,
            model,
            maxlen,
        }
    }

    /// Build the padded id sequence the model expects.
    pub fn encode(&self, normalized: &str) -> Vec<u32> {
        let ids = self.tokenizer.texts_to_sequence(normalized);
        pad_sequence(&ids, self.maxlen)
    }

    pub async fn predict(&self, normalized: &str) -> Result<Prediction, ModelError> {
        let sequence = self.encode(normalized);
        let probability = self.model.predict(&sequence).await?;
        let prediction = Prediction::from_probability(f64::from(probability));

        tracing::debug!(
            "Classified as {} (p={:.4})",
            prediction.label,
            prediction.probability
        );

        Ok(prediction)
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn model(&self) -> &dyn SequenceModel {
        self.model.as_ref()
    }

    pub fn maxlen(&self) -> usize {
        self.maxlen
    }
}
