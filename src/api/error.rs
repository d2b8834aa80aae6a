use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::business::BusinessStoreError;
use crate::photo::PhotoStoreError;
use crate::review::ReviewStoreError;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            error!("API error: {}", message);
            // internal detail stays in the logs
            let body = Json(json!({ "err": "Server error.  Please try again later." }));
            return (status, body).into_response();
        }

        warn!("API client error: {}", message);
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<BusinessStoreError> for ApiError {
    fn from(err: BusinessStoreError) -> Self {
        ApiError::Internal(format!("business store error: {}", err))
    }
}

impl From<ReviewStoreError> for ApiError {
    fn from(err: ReviewStoreError) -> Self {
        match err {
            ReviewStoreError::Duplicate { .. } => ApiError::Forbidden(
                "User has already posted a review of this business".to_string(),
            ),
            other => ApiError::Internal(format!("review store error: {}", other)),
        }
    }
}

impl From<PhotoStoreError> for ApiError {
    fn from(err: PhotoStoreError) -> Self {
        ApiError::Internal(format!("photo store error: {}", err))
    }
}
