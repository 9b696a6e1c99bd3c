// JSON extractor that runs `validator` checks after deserializing.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// Deserialize then validate the request body.
///
/// Syntax errors and a missing content type are a 400, an oversized body a
/// 413; well-formed JSON of the wrong shape, or failing validation, is a 422.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err: JsonRejection| match err.status() {
                StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(err.body_text()),
                StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
                _ => ApiError::BadRequest(err.body_text()),
            })?;

        data.validate()
            .map_err(|errors| ApiError::Validation(errors.to_string()))?;

        Ok(ValidatedJson(data))
    }
}
