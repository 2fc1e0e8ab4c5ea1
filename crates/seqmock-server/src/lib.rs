//! seqmock server - HTTP test double for a sequencer's commitment API
//!
//! The router is usable in-process (see `api::router`) so tests can drive
//! independent instances; `server::serve` puts it on a socket.

pub mod api;
pub mod server;

pub use api::{router, AppState};
pub use server::{bind, serve, DEFAULT_PORT};
