//! Listener setup and the serve loop

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use tokio::net::TcpListener;

use seqmock_core::{log_op_error, Commitment, Result, SeqMockError};

use crate::api::{router, AppState};

pub const DEFAULT_PORT: u16 = 3001;

/// All interfaces on `port`
pub fn listen_addr(port: u16) -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], port))
}

/// Bind the listener; failure is fatal for the binary
///
/// # Errors
///
/// Returns `SeqMockError::Bind` when the port is taken or not permitted.
pub async fn bind(port: u16) -> Result<TcpListener> {
    let started = Instant::now();
    let addr = listen_addr(port);
    TcpListener::bind(addr).await.map_err(|e| {
        let err = SeqMockError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        };
        log_op_error!(
            "bind",
            &err,
            duration_ms = started.elapsed().as_millis() as u64
        );
        err
    })
}

/// Serve the API on `listener` with `seed` as the only pending commitment
///
/// Runs until the process is interrupted.
///
/// # Errors
///
/// Returns `SeqMockError::Serve` if the accept loop fails.
pub async fn serve(listener: TcpListener, seed: Commitment) -> Result<()> {
    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    tracing::info!(address = %local, "mock sequencer listening");
    tracing::info!(batch_id = %seed.batch_id, "initial batch");

    let app = router(Arc::new(AppState::new(seed)));
    axum::serve(listener, app)
        .await
        .map_err(|e| SeqMockError::Serve {
            reason: e.to_string(),
        })
}
