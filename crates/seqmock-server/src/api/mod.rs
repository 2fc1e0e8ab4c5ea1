//! HTTP surface of the mock sequencer
//!
//! - GET  /health                             - liveness, always `{"status":"ok"}`
//! - GET  /v1/commitments/pending             - pending commitments and their count
//! - POST /v1/commitments/{batch_id}/anchored - record anchoring, drop from pending
//! - GET  /__mock/stats                       - counts plus the last notification
//!
//! Anything else is a 404: a known path with the wrong method (`HEAD`
//! included), a request target carrying a query string, or a batch id that
//! is not literally hex digits and hyphens.

mod error;
mod exact_target;
mod request_log;
pub mod types;

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use tokio::sync::Mutex;

use seqmock_core::{
    log_op_end, log_op_error, log_op_start, Commitment, CommitmentStore, ExError, Notification,
    SeqMockError,
};
use seqmock_core_types::RequestId;

pub use error::ApiError;
pub use types::{ErrorResponse, PendingCommitmentsResponse, StatsResponse, StatusResponse};

/// State shared by all handlers
///
/// One mutex around the whole store: each request sees and leaves it
/// consistent, and mutations never interleave.
pub struct AppState {
    store: Mutex<CommitmentStore>,
}

impl AppState {
    /// State whose only pending commitment is `seed`
    pub fn new(seed: Commitment) -> Self {
        Self {
            store: Mutex::new(CommitmentStore::new(seed)),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .route(
            "/v1/commitments/pending",
            get(list_pending).fallback(not_found),
        )
        .route(
            "/v1/commitments/:batch_id/anchored",
            post(anchor_commitment).fallback(not_found),
        )
        .route("/__mock/stats", get(stats).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(exact_target::require_exact_target))
        .layer(middleware::from_fn(request_log::log_request))
}

/// Path ids are one or more hex digits or hyphens
pub fn is_batch_id(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}

/// Batch id segment exactly as sent, before any percent-decoding
fn raw_batch_id(uri: &Uri) -> Option<&str> {
    uri.path()
        .strip_prefix("/v1/commitments/")?
        .strip_suffix("/anchored")
}

async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}

async fn list_pending(State(state): State<Arc<AppState>>) -> Json<PendingCommitmentsResponse> {
    let pending = state.store.lock().await.pending().to_vec();
    Json(PendingCommitmentsResponse::new(pending))
}

async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(state.store.lock().await.stats())
}

/// Record an anchoring notification
///
/// Never fails for a well-formed path: unknown ids and repeat calls still
/// append a notification, and unreadable bodies become `{}`.
async fn anchor_commitment(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    request_id: Option<Extension<RequestId>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let start = Instant::now();
    let batch_id = match raw_batch_id(&uri) {
        Some(segment) if is_batch_id(segment) => segment.to_string(),
        segment => {
            let err = SeqMockError::InvalidBatchId {
                batch_id: segment.unwrap_or_else(|| uri.path()).to_string(),
            };
            let mut ex_err = ExError::from(&err);
            if let Some(Extension(request_id)) = request_id {
                ex_err = ex_err.with_request_id(request_id);
            }
            log_op_error!(
                "anchor_commitment",
                ex_err,
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(ApiError::from(&err));
        }
    };

    log_op_start!("anchor_commitment", batch_id = %batch_id);

    let payload = match body {
        Ok(bytes) => Notification::payload_from_body(&bytes),
        Err(rejection) => {
            tracing::debug!(%rejection, "anchoring body unreadable, recording {{}}");
            Default::default()
        }
    };
    let outcome = state.store.lock().await.anchor(&batch_id, payload);

    log_op_end!(
        "anchor_commitment",
        duration_ms = start.elapsed().as_millis() as u64,
        batch_id = %batch_id,
        removed = outcome.removed as u64,
        pending_len = outcome.remaining as u64
    );
    Ok(Json(StatusResponse::ok()))
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    let err = SeqMockError::RouteNotFound {
        method: method.to_string(),
        path: target.to_string(),
    };
    tracing::debug!(error = %err, "unmatched request");
    ApiError::from(&err)
}
