//! Wire shapes of every response body

use serde::{Deserialize, Serialize};

use seqmock_core::{Commitment, StoreStats};

/// `{"status": "ok"}`, returned by `/health` and the anchoring endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of `GET /v1/commitments/pending`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingCommitmentsResponse {
    pub commitments: Vec<Commitment>,
    pub total: usize,
}

impl PendingCommitmentsResponse {
    pub fn new(commitments: Vec<Commitment>) -> Self {
        Self {
            total: commitments.len(),
            commitments,
        }
    }
}

/// Body of `GET /__mock/stats`
pub type StatsResponse = StoreStats;

/// Body of every 404
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
