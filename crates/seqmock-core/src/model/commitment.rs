use serde::{Deserialize, Serialize};

/// The all-zero 32-byte root, used as the genesis `prev_state_root`
pub const ZERO_ROOT: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Commitment - a sequenced batch of events awaiting anchoring
///
/// Every field is opaque to the mock: identifiers and roots are carried
/// as strings exactly as supplied (or fabricated), and no relationship
/// between `event_count` and the sequence range is enforced. Field order
/// here is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    /// Unique batch identifier (UUID-shaped)
    pub batch_id: String,

    /// Tenant identifier (UUID-shaped)
    pub tenant_id: String,

    /// Store identifier (UUID-shaped)
    pub store_id: String,

    /// State root before applying this batch (`0x` + 64 hex chars)
    pub prev_state_root: String,

    /// State root after applying this batch
    pub new_state_root: String,

    /// Merkle root of events in this batch
    pub events_root: String,

    /// First sequence number in batch (inclusive)
    pub sequence_start: i64,

    /// Last sequence number in batch (inclusive)
    pub sequence_end: i64,

    /// Number of events in batch
    pub event_count: i64,

    /// ISO-8601 timestamp with offset
    pub committed_at: String,

    /// On-chain transaction hash; always `null` in anything this mock creates
    pub chain_tx_hash: Option<String>,
}

impl Commitment {
    /// Whether this commitment belongs to the given batch
    pub fn is_batch(&self, batch_id: &str) -> bool {
        self.batch_id == batch_id
    }
}
