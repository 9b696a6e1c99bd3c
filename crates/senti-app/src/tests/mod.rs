use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use senti_config::Config;
use senti_core::SentimentClassifier;
use senti_core::Tokenizer;
use senti_core::tokenizer::DEMO_CORPUS;
use senti_model::{ModelError, ModelMetadata, SequenceModel};
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, ModelLifecycle, build_app};


/// Always answers with the same probability
pub struct StubModel(pub f32);

#[async_trait::async_trait]
impl SequenceModel for StubModel {
    async fn predict(&self, _sequence: &[u32]) -> Result<f32, ModelError> {
        Ok(self.0)
    }

    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            name: "stub".to_string(),
            endpoint: None,
        }
    }
}

pub struct FailingModel;

#[async_trait::async_trait]
impl SequenceModel for FailingModel {
    async fn predict(&self, _sequence: &[u32]) -> Result<f32, ModelError> {
        Err(ModelError::ApiError("HTTP 502 Bad Gateway".to_string()))
    }

    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            name: "failing".to_string(),
            endpoint: None,
        }
    }
}

pub fn ready(model: impl SequenceModel + 'static) -> ModelLifecycle {
    let mut tokenizer = Tokenizer::new(5000);
    tokenizer.fit_on_texts(DEMO_CORPUS);
    ModelLifecycle::ready(SentimentClassifier::new(tokenizer, Arc::new(model), 200))
}

pub fn app(lifecycle: ModelLifecycle) -> Router {
    app_with_config(Config::default(), lifecycle)
}

pub fn app_with_config(config: Config, lifecycle: ModelLifecycle) -> Router {
    build_app(Arc::new(AppState::new(config, lifecycle)))
}

pub fn config_from(pairs: &[(&str, &str)]) -> Config {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(move |key| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Drive one request through the router and decode the JSON body
/// (`Null` when the body is empty or not JSON).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, headers, json)
}
