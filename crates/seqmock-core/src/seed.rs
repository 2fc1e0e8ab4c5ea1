//! Seed Builder
//!
//! Builds the single Commitment the mock starts with. Every field can be
//! pinned through a `MOCK_*` variable; anything unset gets a well-formed
//! fabricated value. Inputs are trusted: identifiers and roots pass through
//! unchecked, integers only need to parse (signed, so `-5` is kept as is).
//!
//! | Field            | Variable               | Fallback                     |
//! |------------------|------------------------|------------------------------|
//! | batch_id         | `MOCK_BATCH_ID`        | random UUIDv4                |
//! | tenant_id        | `MOCK_TENANT_ID`       | random UUIDv4                |
//! | store_id         | `MOCK_STORE_ID`        | random UUIDv4                |
//! | prev_state_root  | `MOCK_PREV_STATE_ROOT` | all-zero root                |
//! | new_state_root   | `MOCK_NEW_STATE_ROOT`  | random root                  |
//! | events_root      | `MOCK_EVENTS_ROOT`     | random root                  |
//! | sequence_start   | `MOCK_SEQUENCE_START`  | 1                            |
//! | sequence_end     | `MOCK_SEQUENCE_END`    | resolved `sequence_start`    |
//! | event_count      | `MOCK_EVENT_COUNT`     | 1                            |
//! | committed_at     | `MOCK_COMMITTED_AT`    | now, UTC                     |

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::model::{Commitment, ZERO_ROOT};
use crate::{log_op_end, log_op_start};

pub const DEFAULT_SEQUENCE_START: i64 = 1;
pub const DEFAULT_EVENT_COUNT: i64 = 1;

/// Where seed overrides are read from
///
/// `ProcessEnv` is what the binary uses; a `HashMap` lets tests pin
/// values without touching the process environment.
pub trait SeedSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads overrides from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SeedSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl SeedSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// How a string field is filled when its variable is unset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFallback {
    RandomUuid,
    ZeroRoot,
    RandomRoot,
    Now,
}

impl TextFallback {
    fn produce(self) -> String {
        match self {
            TextFallback::RandomUuid => Uuid::new_v4().to_string(),
            TextFallback::ZeroRoot => ZERO_ROOT.to_string(),
            TextFallback::RandomRoot => random_root(),
            TextFallback::Now => now_timestamp(),
        }
    }
}

/// String-valued seed variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVar {
    BatchId,
    TenantId,
    StoreId,
    PrevStateRoot,
    NewStateRoot,
    EventsRoot,
    CommittedAt,
}

impl TextVar {
    pub const ALL: [TextVar; 7] = [
        TextVar::BatchId,
        TextVar::TenantId,
        TextVar::StoreId,
        TextVar::PrevStateRoot,
        TextVar::NewStateRoot,
        TextVar::EventsRoot,
        TextVar::CommittedAt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextVar::BatchId => "MOCK_BATCH_ID",
            TextVar::TenantId => "MOCK_TENANT_ID",
            TextVar::StoreId => "MOCK_STORE_ID",
            TextVar::PrevStateRoot => "MOCK_PREV_STATE_ROOT",
            TextVar::NewStateRoot => "MOCK_NEW_STATE_ROOT",
            TextVar::EventsRoot => "MOCK_EVENTS_ROOT",
            TextVar::CommittedAt => "MOCK_COMMITTED_AT",
        }
    }

    pub fn fallback(self) -> TextFallback {
        match self {
            TextVar::BatchId | TextVar::TenantId | TextVar::StoreId => TextFallback::RandomUuid,
            TextVar::PrevStateRoot => TextFallback::ZeroRoot,
            TextVar::NewStateRoot | TextVar::EventsRoot => TextFallback::RandomRoot,
            TextVar::CommittedAt => TextFallback::Now,
        }
    }
}

/// Integer-valued seed variables
///
/// Defaults are supplied at resolution time because `sequence_end`
/// defaults to whatever `sequence_start` resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntVar {
    SequenceStart,
    SequenceEnd,
    EventCount,
}

impl IntVar {
    pub const ALL: [IntVar; 3] = [IntVar::SequenceStart, IntVar::SequenceEnd, IntVar::EventCount];

    pub fn name(self) -> &'static str {
        match self {
            IntVar::SequenceStart => "MOCK_SEQUENCE_START",
            IntVar::SequenceEnd => "MOCK_SEQUENCE_END",
            IntVar::EventCount => "MOCK_EVENT_COUNT",
        }
    }
}

/// Trimmed value of `name`, or `None` when unset or blank
fn lookup<S: SeedSource + ?Sized>(source: &S, name: &str) -> Option<String> {
    source
        .get(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve a string field, fabricating a value when unset
pub fn resolve_text<S: SeedSource + ?Sized>(source: &S, var: TextVar) -> String {
    match lookup(source, var.name()) {
        Some(value) => value,
        None => {
            tracing::debug!(var = var.name(), fallback = ?var.fallback(), "seed variable unset");
            var.fallback().produce()
        }
    }
}

/// Resolve an integer field, using `default` when unset or unparseable
pub fn resolve_int<S, T>(source: &S, var: IntVar, default: T) -> T
where
    S: SeedSource + ?Sized,
    T: FromStr + Copy + std::fmt::Debug,
{
    let Some(raw) = lookup(source, var.name()) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(
                var = var.name(),
                value = %raw,
                default = ?default,
                "seed variable is not an integer, using default"
            );
            default
        }
    }
}

/// Build the seed commitment from `source`
///
/// `chain_tx_hash` is always `None`. No cross-field checks are made:
/// `sequence_end < sequence_start` and any `event_count` are accepted.
pub fn build_seed<S: SeedSource + ?Sized>(source: &S) -> Commitment {
    let start = Instant::now();
    log_op_start!("build_seed");

    let sequence_start = resolve_int(source, IntVar::SequenceStart, DEFAULT_SEQUENCE_START);
    let sequence_end = resolve_int(source, IntVar::SequenceEnd, sequence_start);
    let event_count = resolve_int(source, IntVar::EventCount, DEFAULT_EVENT_COUNT);

    let commitment = Commitment {
        batch_id: resolve_text(source, TextVar::BatchId),
        tenant_id: resolve_text(source, TextVar::TenantId),
        store_id: resolve_text(source, TextVar::StoreId),
        prev_state_root: resolve_text(source, TextVar::PrevStateRoot),
        new_state_root: resolve_text(source, TextVar::NewStateRoot),
        events_root: resolve_text(source, TextVar::EventsRoot),
        sequence_start,
        sequence_end,
        event_count,
        committed_at: resolve_text(source, TextVar::CommittedAt),
        chain_tx_hash: None,
    };

    log_op_end!(
        "build_seed",
        duration_ms = start.elapsed().as_millis() as u64,
        batch_id = %commitment.batch_id
    );
    commitment
}

/// Build the seed commitment from the process environment
pub fn seed_from_env() -> Commitment {
    build_seed(&ProcessEnv)
}

/// `0x` followed by 64 hex chars taken from two random UUIDs
///
/// Unique, not cryptographically meaningful.
pub fn random_root() -> String {
    let mut bytes = [0u8; 32];
    bytes[..16].copy_from_slice(Uuid::new_v4().as_bytes());
    bytes[16..].copy_from_slice(Uuid::new_v4().as_bytes());
    format!("0x{}", hex::encode(bytes))
}

/// Current UTC time, e.g. `2024-05-01T12:00:00.123456+00:00`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
