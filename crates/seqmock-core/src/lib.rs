//! seqmock core - in-memory state of the mock sequencer
//!
//! This crate provides:
//! - The `Commitment` and `Notification` wire models
//! - The seed builder that turns `MOCK_*` variables into the initial commitment
//! - `CommitmentStore`, the pending list plus the anchoring notification log
//! - The error facility and the structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use seqmock_core_types::schema;
pub use errors::{ExError, ExErrorKind, Result, SeqMockError};
pub use model::{Commitment, Notification, NotificationPayload, ZERO_ROOT};
pub use seed::{build_seed, seed_from_env, ProcessEnv, SeedSource};
pub use store::{AnchorOutcome, CommitmentStore, StoreStats};
