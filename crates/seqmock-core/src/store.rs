use serde::{Deserialize, Serialize};

use crate::model::{Commitment, Notification, NotificationPayload};

/// In-memory state of the mock sequencer
///
/// `pending` starts as the seed and only ever shrinks; `notifications` is
/// append-only. Not thread-safe on its own: the server wraps it in a
/// single mutex so requests mutate it one at a time.
#[derive(Debug, Clone)]
pub struct CommitmentStore {
    pending: Vec<Commitment>,
    notifications: Vec<Notification>,
}

/// Result of one anchoring call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorOutcome {
    /// Pending entries removed; 0 for unknown or already-anchored batches
    pub removed: usize,
    /// Pending entries left after removal
    pub remaining: usize,
}

/// Snapshot served by the diagnostic stats endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    pub pending: usize,
    pub anchored_notifications: usize,
    pub last_notification: Option<Notification>,
}

impl CommitmentStore {
    /// Create a store whose only pending entry is `seed`
    pub fn new(seed: Commitment) -> Self {
        Self {
            pending: vec![seed],
            notifications: Vec::new(),
        }
    }

    /// Pending commitments in insertion order
    pub fn pending(&self) -> &[Commitment] {
        &self.pending
    }

    /// Notifications in arrival order
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            pending: self.pending.len(),
            anchored_notifications: self.notifications.len(),
            last_notification: self.notifications.last().cloned(),
        }
    }

    /// Record that `batch_id` was anchored
    ///
    /// The notification is appended even when nothing is pending under
    /// `batch_id`. Every matching pending entry is removed.
    pub fn anchor(&mut self, batch_id: &str, payload: NotificationPayload) -> AnchorOutcome {
        self.notifications.push(Notification::new(batch_id, payload));

        let before = self.pending.len();
        self.pending.retain(|c| !c.is_batch(batch_id));

        AnchorOutcome {
            removed: before - self.pending.len(),
            remaining: self.pending.len(),
        }
    }
}
