//! Error types shared by all services.
//!
//! Gateway-originated failures are expressed as `AppError` and rendered as
//! JSON `ApiResponse` envelopes. Error responses that originate from the
//! backend are never wrapped here; they are relayed verbatim by the handler.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

/// Convenient result alias for fallible service operations.
pub type AppResult<T> = Result<T, AppError>;

/// Failures the gateway itself can produce.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bearer token missing, malformed, or not matching the configured secret.
    #[error("invalid authentication token")]
    Unauthorized,

    /// Request body failed validation before reaching the backend.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The backend could not be reached at the transport level.
    #[error("failed to connect to ClickHouse: {0}")]
    BackendUnavailable(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Stable machine-readable error code for clients.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ApiResponse::err(self.error_code(), self.to_string()));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Validation("query is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BackendUnavailable("connection refused".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_unauthorized_sets_www_authenticate() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
