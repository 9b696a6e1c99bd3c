use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use senti_types::{Endpoints, HealthResponse, ReadinessResponse, RootResponse, TestResponse};

use crate::state::AppState;

pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    let config = &state.config;

    Json(RootResponse {
        message: config.app.name.clone(),
        version: config.app.version.clone(),
        endpoints: Endpoints {
            predict: config.server.predict_path(),
            health: config.server.health_path(),
        },
    })
}

/// Liveness plus what has been loaded; always 200.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.lifecycle.is_ready(),
        tokenizer_loaded: state.lifecycle.tokenizer_loaded(),
        environment: state.config.app.environment.clone(),
    })
}

pub async fn readiness(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    match state.lifecycle.reason() {
        None => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready".to_string(),
                reason: None,
            }),
        ),
        Some(reason) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not ready".to_string(),
                reason: Some(reason.to_string()),
            }),
        ),
    }
}

pub async fn test_endpoint(State(state): State<Arc<AppState>>) -> Json<TestResponse> {
    Json(TestResponse {
        message: "API is working!".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        version: state.config.app.version.clone(),
    })
}
