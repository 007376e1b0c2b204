//! Relay error types.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::relay::validate::ValidationError;

/// Failure talking to the upstream API.
///
/// The display text is the transport's own description and is returned to
/// the caller as-is.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The configured base URL could not be parsed.
    #[error("invalid upstream base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// Connection, TLS, or client construction failure.
    #[error("{0}")]
    Transport(reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("{0}")]
    Status(reqwest::Error),

    /// The upstream body was not valid JSON.
    #[error("{0}")]
    Decode(reqwest::Error),
}

impl UpstreamError {
    /// HTTP status the upstream answered with, if it answered at all.
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status(e) => e
                .status()
                .and_then(|s| StatusCode::from_u16(s.as_u16()).ok()),
            _ => None,
        }
    }
}

/// Terminal per-request failure of a relay route.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The path parameter could not be extracted, e.g. it is not valid UTF-8.
    #[error("{}", .0.body_text())]
    Path(PathRejection),
}

impl RelayError {
    /// Status code returned to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Path(rejection) => rejection.status(),
        }
    }
}
