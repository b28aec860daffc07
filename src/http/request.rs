//! Request snapshotting.
//!
//! # Responsibilities
//! - Render the header collection to display text
//! - Read the full body within the configured limit
//!
//! # Design Decisions
//! - Header rendering keeps insertion order and groups repeated names
//! - Header values that are not UTF-8 are rendered lossily; the body is
//!   kept as raw bytes

use axum::body::{Body, Bytes};
use axum::http::HeaderMap;
use http_body_util::LengthLimitError;

use crate::http::response::HandlerError;

/// Render headers as `{name: [v1, v2], other: [v]}`.
pub fn render_headers(headers: &HeaderMap) -> String {
    let mut out = String::from("{");
    for (i, name) in headers.keys().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(name.as_str());
        out.push_str(": [");
        for (j, value) in headers.get_all(name).iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            out.push_str(&String::from_utf8_lossy(value.as_bytes()));
        }
        out.push(']');
    }
    out.push('}');
    out
}

/// Buffer the whole request body, failing past `limit` bytes.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, HandlerError> {
    axum::body::to_bytes(body, limit).await.map_err(|err| {
        let inner = err.into_inner();
        if inner.is::<LengthLimitError>() {
            HandlerError::BodyTooLarge { limit }
        } else {
            HandlerError::BodyRead(inner.to_string())
        }
    })
}
