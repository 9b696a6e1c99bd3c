use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use senti_types::{ApiHealthResponse, SentimentRequest, SentimentResponse};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// Normalize the submitted text and classify it.
pub async fn predict_sentiment(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<SentimentRequest>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let classifier = state.lifecycle.classifier().ok_or_else(|| {
        ApiError::NotReady(
            state
                .lifecycle
                .reason()
                .unwrap_or("model is not initialized")
                .to_string(),
        )
    })?;

    let processed_text = state.preprocessor.process(&request.text);
    tracing::debug!(
        "Normalized {} chars into {:?}",
        request.text.chars().count(),
        processed_text
    );

    let prediction = classifier.predict(&processed_text).await?;
    tracing::info!(
        "Predicted {} (confidence {:.3})",
        prediction.label,
        prediction.confidence
    );

    Ok(Json(SentimentResponse {
        sentiment: prediction.label,
        confidence: prediction.confidence,
        probability: prediction.probability,
        processed_text,
    }))
}

pub async fn api_health(State(state): State<Arc<AppState>>) -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.lifecycle.is_ready(),
    })
}
