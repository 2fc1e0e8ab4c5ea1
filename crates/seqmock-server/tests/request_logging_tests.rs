#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use seqmock_core::logging_facility::test_capture::init_test_capture;
use seqmock_core::seed::build_seed;
use seqmock_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_BATCH_ID, FIELD_ERR_CODE, FIELD_METHOD,
    FIELD_PATH, FIELD_PENDING_LEN, FIELD_STATUS,
};
use seqmock_server::{router, AppState};

fn app(batch_id: &str) -> axum::Router {
    let mut env = HashMap::new();
    env.insert("MOCK_BATCH_ID".to_string(), batch_id.to_string());
    router(Arc::new(AppState::new(build_seed(&env))))
}

async fn call(app: axum::Router, method: &str, uri: &str) {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_every_request_logs_start_and_end_with_status() {
    let capture = init_test_capture();
    let path = "/unique/request/logging/path";

    call(app("aa"), "GET", path).await;

    let matching = |event: &str| {
        capture.count_events(|e| {
            e.is("http_request", event)
                && e.field(FIELD_PATH) == Some(path)
                && e.field(FIELD_METHOD) == Some("GET")
        })
    };
    assert_eq!(matching(EVENT_START), 1);
    assert_eq!(matching(EVENT_END), 1);
    assert_eq!(
        capture.count_events(|e| e.is("http_request", EVENT_END)
            && e.field(FIELD_PATH) == Some(path)
            && e.field(FIELD_STATUS) == Some("404")),
        1
    );
}

#[tokio::test]
async fn test_anchoring_logs_batch_and_remaining_pending() {
    let capture = init_test_capture();
    let batch_id = "0123abcd-4567-89ef-0123-456789abcdef";

    call(
        app(batch_id),
        "POST",
        &format!("/v1/commitments/{}/anchored", batch_id),
    )
    .await;

    capture.assert_field("anchor_commitment", EVENT_START, FIELD_BATCH_ID, batch_id);
    assert_eq!(
        capture.count_events(|e| e.is("anchor_commitment", EVENT_END)
            && e.field(FIELD_BATCH_ID) == Some(batch_id)
            && e.field(FIELD_PENDING_LEN) == Some("0")),
        1
    );
}

#[tokio::test]
async fn test_rejected_batch_id_logs_not_found_error() {
    let capture = init_test_capture();

    call(app("bb"), "POST", "/v1/commitments/zzz-unique-reject/anchored").await;

    capture.assert_field(
        "anchor_commitment",
        EVENT_END_ERROR,
        FIELD_ERR_CODE,
        "ERR_NOT_FOUND",
    );
}

#[tokio::test]
async fn test_rejected_batch_id_error_carries_request_id() {
    let capture = init_test_capture();

    app("cc")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/commitments/not-a-batch-zz/anchored")
                .header("x-request-id", "req-rejected-anchor")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let errors = capture.count_events(|e| {
        e.is("anchor_commitment", EVENT_END_ERROR)
            && e.field("err_message")
                .is_some_and(|m| m.contains("(request_id: req-rejected-anchor)"))
    });
    assert_eq!(errors, 1);
}
