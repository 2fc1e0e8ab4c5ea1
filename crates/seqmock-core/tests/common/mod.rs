use std::collections::HashMap;

use seqmock_core::{Commitment, ZERO_ROOT};

/// Build a seed source from literal pairs
#[allow(dead_code)]
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A fully pinned commitment for store tests
#[allow(dead_code)]
pub fn commitment(batch_id: &str) -> Commitment {
    Commitment {
        batch_id: batch_id.to_string(),
        tenant_id: "11111111-1111-1111-1111-111111111111".to_string(),
        store_id: "22222222-2222-2222-2222-222222222222".to_string(),
        prev_state_root: ZERO_ROOT.to_string(),
        new_state_root: format!("0x{}", "ab".repeat(32)),
        events_root: format!("0x{}", "cd".repeat(32)),
        sequence_start: 1,
        sequence_end: 10,
        event_count: 10,
        committed_at: "2024-05-01T12:00:00.000000+00:00".to_string(),
        chain_tx_hash: None,
    }
}
