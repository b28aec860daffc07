//! Response payloads and error mapping.
//!
//! # Responsibilities
//! - Define the fixed JSON acknowledgement
//! - Map per-request failures to status codes
//!
//! # Design Decisions
//! - A failed request gets a 4xx reply; the server keeps running
//! - Error bodies reuse the acknowledgement shape: `{"message": ...}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every request that is fully dumped.
pub const STATUS_OK: &str = "Status OK";

/// JSON body `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn ok() -> Self {
        Self {
            message: STATUS_OK.to_string(),
        }
    }
}

/// Failure while handling a single request.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    BodyRead(String),
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            HandlerError::BodyRead(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Request failed");
        (
            status,
            Json(StatusMessage {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_payload_shape() {
        let json = serde_json::to_string(&StatusMessage::ok()).unwrap();
        assert_eq!(json, r#"{"message":"Status OK"}"#);
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            HandlerError::BodyTooLarge { limit: 1 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            HandlerError::BodyRead("reset".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_response() {
        let response = HandlerError::BodyTooLarge { limit: 4 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
