use crate::gateway::ffbridge::FfbridgeError;
use crate::gateway::UpstreamError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use bridge_core::FormatError;
use bridge_tabular::EnrichError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Route-level error. The status decision lives here, at the HTTP boundary;
/// the body is always `{"detail": ..}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Internal(_)) {
            warn!("request failed: {}", self);
        }
        (self.status(), Json(json!({"detail": self.to_string()}))).into_response()
    }
}

impl From<FormatError> for ApiError {
    fn from(err: FormatError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<FfbridgeError> for ApiError {
    fn from(err: FfbridgeError) -> Self {
        match err {
            FfbridgeError::Upstream(e) => e.into(),
            // Valid data in an unsupported seating convention is "no
            // result"; a malformed payload is a server-side failure.
            FfbridgeError::Enrich(EnrichError::Movement(e)) => ApiError::NotFound(e.to_string()),
            FfbridgeError::Enrich(e) => ApiError::Internal(e.to_string()),
            FfbridgeError::Schema(e) => ApiError::Internal(e.to_string()),
        }
    }
}
