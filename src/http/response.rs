//! Response envelope.
//!
//! Every API route answers with one of:
//!
//! ```json
//! { "status": "success", "data": <upstream JSON> }
//! { "status": "error", "message": "<description>" }
//! ```

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::relay::RelayError;

/// The uniform JSON wrapper returned by API routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success { data: Value },
    Error { message: String },
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Envelope::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            message: message.into(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(Envelope::error(self.to_string()))).into_response()
    }
}
