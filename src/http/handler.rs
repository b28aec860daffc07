//! The catch-all dump handler.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::Json;

use crate::charset::{convert, Charset};
use crate::http::request::{read_body, render_headers};
use crate::http::response::{HandlerError, StatusMessage};
use crate::http::server::AppState;
use crate::observability::DumpSink;

/// Dump the request's headers and body, then acknowledge it.
///
/// Every method and path is handled the same way.
pub async fn dump_request(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Json<StatusMessage>, HandlerError> {
    let charset = state.config.charset;
    let (parts, body) = request.into_parts();

    let headers = render_headers(&parts.headers);
    dump_text(&state.sink, "Header", &headers, charset);

    let body = read_body(body, state.config.max_body_bytes).await?;
    match std::str::from_utf8(&body) {
        Ok(text) => dump_text(&state.sink, "Body", text, charset),
        Err(_) => {
            tracing::debug!(len = body.len(), "Body is not UTF-8; dumping raw bytes");
            write_dump(&state.sink, "Body", &body);
        }
    }

    tracing::debug!(
        method = %parts.method,
        uri = %parts.uri,
        body_len = body.len(),
        "Request dumped"
    );

    Ok(Json(StatusMessage::ok()))
}

fn dump_text(sink: &DumpSink, label: &str, text: &str, charset: Charset) {
    write_dump(sink, label, &convert(text, charset));
}

fn write_dump(sink: &DumpSink, label: &str, payload: &[u8]) {
    if let Err(e) = sink.write_line(label, payload) {
        tracing::warn!(label, error = %e, "Failed to write dump");
    }
}
