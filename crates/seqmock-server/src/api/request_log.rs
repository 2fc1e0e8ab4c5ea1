use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

use seqmock_core::{log_op_end, log_op_start};
use seqmock_core_types::correlation::REQUEST_ID_HEADER;
use seqmock_core_types::RequestId;

/// Wrap every request in a span carrying its `RequestId`
///
/// Logs `start` and `end` for op `http_request` and echoes the id back in
/// the `x-request-id` response header. Handlers can read the id from the
/// request extensions.
pub(super) async fn log_request(mut request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = RequestId::from_header(
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    );
    request.extensions_mut().insert(request_id.clone());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = async move {
        log_op_start!("http_request", method = %method, path = %path);
        let response = next.run(request).await;
        log_op_end!(
            "http_request",
            duration_ms = started.elapsed().as_millis() as u64,
            method = %method,
            path = %path,
            status = response.status().as_u16()
        );
        response
    }
    .instrument(span)
    .await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
