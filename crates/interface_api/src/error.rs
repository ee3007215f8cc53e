//! API error handling

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::StoreError;

use crate::config::StoreBackend;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// Error response body
///
/// `detail` carries the store-layer message unchanged.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    /// Maps a store failure onto the API taxonomy.
    ///
    /// Read and write failures become upstream errors (502) when the
    /// backing store is itself a remote instance of this API.
    pub fn from_store(err: StoreError, backend: StoreBackend) -> Self {
        let upstream = backend == StoreBackend::Remote;
        match err {
            StoreError::Validation { message } => ApiError::Validation(message),
            StoreError::Retrieval { message, .. } if upstream => ApiError::Upstream(message),
            StoreError::Retrieval { message, .. } => ApiError::Retrieval(message),
            StoreError::Persistence { message, .. } if upstream => ApiError::Upstream(message),
            StoreError::Persistence { message, .. } => ApiError::Persistence(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::Retrieval(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "retrieval_error", msg),
            ApiError::Persistence(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error", msg)
            }
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "upstream_error", msg),
        };

        let body = ErrorEnvelope {
            ok: false,
            error: error_type.to_string(),
            detail: Some(detail),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor whose rejection is the standard error envelope.
#[derive(Debug, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query extractor whose rejection is the standard error envelope.
#[derive(Debug, axum::extract::FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
