//! Error types for the photo gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Upstream Error Enum ==
/// Failure of a call to the upstream photo API.
///
/// Never cached; surfaced unchanged to the caller of a memoized operation.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection, TLS or timeout failure
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned {status} for {path}")]
    Status { status: u16, path: String },

    /// Upstream payload could not be decoded
    #[error("malformed upstream payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let err = err.without_url();
        if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Transport(err)
        }
    }
}

// == Page Error Enum ==
/// Invalid pagination parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("page limit must be greater than zero")]
    ZeroLimit,
}

// == App Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown rover or resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream API failure
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        if let AppError::Upstream(err) = &self {
            tracing::warn!(error = %err, "upstream failure");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("rover".into()), StatusCode::NOT_FOUND),
            (AppError::InvalidRequest("sol".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Upstream(UpstreamError::Status {
                    status: 429,
                    path: "/mars-photos/api/v1/manifests/spirit".into(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_page_error_is_invalid_request() {
        let err: AppError = PageError::ZeroLimit.into();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_upstream_message_is_passed_through() {
        let err = AppError::from(UpstreamError::Decode("missing field `photos`".into()));
        assert_eq!(err.to_string(), "malformed upstream payload: missing field `photos`");
    }
}
