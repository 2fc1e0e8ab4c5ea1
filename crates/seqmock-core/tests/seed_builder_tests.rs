#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::HashMap;

use proptest::prelude::*;
use seqmock_core::seed::{build_seed, resolve_int, resolve_text, IntVar, TextVar};
use seqmock_core::ZERO_ROOT;
use uuid::Uuid;

use common::env;

fn is_root_shaped(value: &str) -> bool {
    value.len() == 66 && value.starts_with("0x") && value[2..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn test_seed_defaults_without_overrides() {
    let seed = build_seed(&HashMap::<String, String>::new());

    assert_eq!(seed.sequence_start, 1);
    assert_eq!(seed.sequence_end, 1);
    assert_eq!(seed.event_count, 1);
    assert_eq!(seed.prev_state_root, ZERO_ROOT);
    assert_eq!(seed.chain_tx_hash, None);
}

#[test]
fn test_seed_fabricates_well_formed_ids_and_roots() {
    let seed = build_seed(&HashMap::<String, String>::new());

    assert!(Uuid::parse_str(&seed.batch_id).is_ok());
    assert!(Uuid::parse_str(&seed.tenant_id).is_ok());
    assert!(Uuid::parse_str(&seed.store_id).is_ok());
    assert!(is_root_shaped(&seed.new_state_root));
    assert!(is_root_shaped(&seed.events_root));
    assert_ne!(seed.new_state_root, seed.events_root);
    assert!(chrono::DateTime::parse_from_rfc3339(&seed.committed_at).is_ok());
    assert!(seed.committed_at.ends_with("+00:00"));
}

#[test]
fn test_two_unpinned_seeds_differ() {
    let a = build_seed(&HashMap::<String, String>::new());
    let b = build_seed(&HashMap::<String, String>::new());

    assert_ne!(a.batch_id, b.batch_id);
    assert_ne!(a.new_state_root, b.new_state_root);
}

#[test]
fn test_sequence_overrides_are_used() {
    let seed = build_seed(&env(&[
        ("MOCK_SEQUENCE_START", "5"),
        ("MOCK_SEQUENCE_END", "9"),
    ]));

    assert_eq!(seed.sequence_start, 5);
    assert_eq!(seed.sequence_end, 9);
}

#[test]
fn test_sequence_end_defaults_to_resolved_start() {
    let seed = build_seed(&env(&[("MOCK_SEQUENCE_START", "42")]));

    assert_eq!(seed.sequence_start, 42);
    assert_eq!(seed.sequence_end, 42);
}

#[test]
fn test_negative_overrides_are_kept() {
    let seed = build_seed(&env(&[
        ("MOCK_SEQUENCE_START", "-5"),
        ("MOCK_EVENT_COUNT", "-2"),
    ]));

    assert_eq!(seed.sequence_start, -5);
    assert_eq!(seed.sequence_end, -5);
    assert_eq!(seed.event_count, -2);
}

#[test]
fn test_unparseable_integers_fall_back() {
    let seed = build_seed(&env(&[
        ("MOCK_SEQUENCE_START", "five"),
        ("MOCK_SEQUENCE_END", "9.5"),
        ("MOCK_EVENT_COUNT", "many"),
    ]));

    assert_eq!(seed.sequence_start, 1);
    assert_eq!(seed.sequence_end, 1);
    assert_eq!(seed.event_count, 1);
}

#[test]
fn test_unparseable_start_still_feeds_end_default() {
    let seed = build_seed(&env(&[("MOCK_SEQUENCE_START", "x"), ("MOCK_EVENT_COUNT", "7")]));

    assert_eq!(seed.sequence_start, 1);
    assert_eq!(seed.sequence_end, 1);
    assert_eq!(seed.event_count, 7);
}

#[test]
fn test_integer_overrides_are_trimmed() {
    let seed = build_seed(&env(&[("MOCK_EVENT_COUNT", "  12 ")]));
    assert_eq!(seed.event_count, 12);
}

#[test]
fn test_inverted_range_is_not_validated() {
    let seed = build_seed(&env(&[
        ("MOCK_SEQUENCE_START", "10"),
        ("MOCK_SEQUENCE_END", "3"),
        ("MOCK_EVENT_COUNT", "0"),
    ]));

    assert_eq!(seed.sequence_start, 10);
    assert_eq!(seed.sequence_end, 3);
    assert_eq!(seed.event_count, 0);
}

#[test]
fn test_text_overrides_pass_through_unchecked() {
    let seed = build_seed(&env(&[
        ("MOCK_BATCH_ID", "not-a-uuid"),
        ("MOCK_TENANT_ID", "tenant-x"),
        ("MOCK_STORE_ID", "store-y"),
        ("MOCK_PREV_STATE_ROOT", "0xdead"),
        ("MOCK_NEW_STATE_ROOT", "0xbeef"),
        ("MOCK_EVENTS_ROOT", "zz"),
        ("MOCK_COMMITTED_AT", "yesterday"),
    ]));

    assert_eq!(seed.batch_id, "not-a-uuid");
    assert_eq!(seed.tenant_id, "tenant-x");
    assert_eq!(seed.store_id, "store-y");
    assert_eq!(seed.prev_state_root, "0xdead");
    assert_eq!(seed.new_state_root, "0xbeef");
    assert_eq!(seed.events_root, "zz");
    assert_eq!(seed.committed_at, "yesterday");
}

#[test]
fn test_blank_text_override_counts_as_unset() {
    let seed = build_seed(&env(&[("MOCK_PREV_STATE_ROOT", "   "), ("MOCK_BATCH_ID", "")]));

    assert_eq!(seed.prev_state_root, ZERO_ROOT);
    assert!(Uuid::parse_str(&seed.batch_id).is_ok());
}

#[test]
fn test_resolve_text_uses_table_fallbacks() {
    let empty = HashMap::<String, String>::new();

    assert_eq!(resolve_text(&empty, TextVar::PrevStateRoot), ZERO_ROOT);
    assert!(is_root_shaped(&resolve_text(&empty, TextVar::EventsRoot)));
    assert!(Uuid::parse_str(&resolve_text(&empty, TextVar::StoreId)).is_ok());
}

proptest! {
    #[test]
    fn prop_integer_overrides_round_trip(start in any::<i64>(), end in any::<i64>(), count in any::<i64>()) {
        let start_s = start.to_string();
        let end_s = end.to_string();
        let count_s = count.to_string();
        let seed = build_seed(&env(&[
            ("MOCK_SEQUENCE_START", start_s.as_str()),
            ("MOCK_SEQUENCE_END", end_s.as_str()),
            ("MOCK_EVENT_COUNT", count_s.as_str()),
        ]));

        prop_assert_eq!(seed.sequence_start, start);
        prop_assert_eq!(seed.sequence_end, end);
        prop_assert_eq!(seed.event_count, count);
    }

    #[test]
    fn prop_non_numeric_input_falls_back(raw in "[a-zA-Z_ ]{1,12}") {
        let src = env(&[("MOCK_SEQUENCE_START", raw.as_str())]);
        prop_assert_eq!(resolve_int(&src, IntVar::SequenceStart, 1i64), 1);
    }
}
