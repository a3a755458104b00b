use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kabuapi_market_data::{ErrorKind, MarketDataError, SecurityCode};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Failure of a quote request, carrying what the response body needs.
///
/// The display strings are what clients see in the `error` field; upstream
/// detail only goes to the log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid id: {0}")]
    InvalidIdentifier(String),
    #[error("not found: {0}")]
    NotFound(SecurityCode),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(SecurityCode),
    #[error("internal server error: {0}")]
    Internal(SecurityCode),
}

impl ApiError {
    /// Classify an upstream failure for `code`.
    pub fn upstream(code: &SecurityCode, err: MarketDataError) -> Self {
        tracing::warn!("Upstream lookup for {} failed: {}", code, err);
        match err.kind() {
            ErrorKind::NotFound => ApiError::NotFound(code.clone()),
            ErrorKind::ServiceUnavailable => ApiError::ServiceUnavailable(code.clone()),
            ErrorKind::UpstreamFailure => ApiError::Internal(code.clone()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn number(&self) -> Option<u64> {
        match self {
            ApiError::InvalidIdentifier(_) => None,
            ApiError::NotFound(code)
            | ApiError::ServiceUnavailable(code)
            | ApiError::Internal(code) => Some(code.number()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            number: self.number(),
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
