use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use senti_model::ModelError;
use senti_types::ErrorResponse;

/// Failures surfaced by the HTTP layer.
///
/// Client mistakes map to 4xx, an unready service to 503 and anything the
/// model does wrong to 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    BadRequest(String),

    #[error("Validation error")]
    Validation(String),

    #[error("Model not ready")]
    NotReady(String),

    #[error("Error during sentiment analysis")]
    Inference(#[from] ModelError),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotReady(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            ApiError::BadRequest(detail)
            | ApiError::Validation(detail)
            | ApiError::NotReady(detail) => Some(detail.clone()),
            ApiError::Inference(e) => Some(e.to_string()),
            ApiError::PayloadTooLarge | ApiError::NotFound => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::error!("{}: {}", self, detail.as_deref().unwrap_or_default());
        } else {
            tracing::warn!("{}: {}", self, detail.as_deref().unwrap_or_default());
        }

        let body = ErrorResponse {
            error: self.to_string(),
            detail,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::NotReady("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Inference(ModelError::RateLimitExceeded).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::PayloadTooLarge.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_inference_detail_carries_cause() {
        let err = ApiError::from(ModelError::ApiError("HTTP 502".to_string()));
        assert_eq!(err.detail().as_deref(), Some("API error: HTTP 502"));
    }
}
