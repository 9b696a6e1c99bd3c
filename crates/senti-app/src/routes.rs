use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::error::ApiError;
use crate::state::AppState;

pub mod info;
pub mod predict;

use info::{health, readiness, root, test_endpoint};
use predict::{api_health, predict_sentiment};

/// Every route the service answers, prediction routes under the configured
/// prefix.
pub fn routes(state: &AppState) -> Router<Arc<AppState>> {
    let server = &state.config.server;

    let mut api_routes = Router::new().route(&server.predict_path(), post(predict_sentiment));
    // an empty prefix would shadow the service-wide health route
    if server.health_path() != "/health" {
        api_routes = api_routes.route(&server.health_path(), get(api_health));
    }

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/readiness", get(readiness))
        .route("/test", get(test_endpoint));

    Router::new()
        .merge(api_routes)
        .merge(public_routes)
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
