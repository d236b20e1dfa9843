// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::model_client::ProviderError;

const PROVIDER_FAILURE: &str = "model provider request failed";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // Provider detail is logged by the handler, never sent to the browser.
            AppError::Provider(_) => (StatusCode::BAD_GATEWAY, PROVIDER_FAILURE.to_string()),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
