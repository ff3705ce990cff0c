//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's behavior over arbitrary keys, payloads
//! and insertion schedules.

use proptest::prelude::*;
use std::collections::HashMap;
use tokio::time::{Duration, Instant};

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(1);

// == Strategies ==
/// Any key, including the empty string and non-ASCII text
fn key_strategy() -> impl Strategy<Value = String> {
    ".{0,64}"
}

/// Any payload, including the empty one
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

/// Operations over a small key space so that overwrites and hits are common
fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    let small_key = "[a-e]";
    prop_oneof![
        (small_key, value_strategy()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        small_key.prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back returns exactly the stored bytes.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_TTL);

        store.insert(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // A key that was never added is never found.
    #[test]
    fn prop_miss_on_unknown_key(
        added in prop::collection::vec((key_strategy(), value_strategy()), 0..20),
        probe in key_strategy()
    ) {
        prop_assume!(!added.iter().any(|(key, _)| key == &probe));
        let mut store = CacheStore::new(TEST_TTL);

        for (key, value) in added {
            store.insert(key, value);
        }

        prop_assert_eq!(store.get(&probe), None);
    }

    // The second of two writes to one key wins, and only one entry exists.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_TTL);

        store.insert(key.clone(), value1);
        store.insert(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // The store behaves like a plain map between sweeps, and the hit/miss
    // counters match the lookups performed.
    #[test]
    fn prop_matches_model_map(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.insert(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let expected = model.get(&key).cloned();
                    if expected.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                    prop_assert_eq!(store.get(&key), expected);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
    }

    // Each entry is judged by its own insertion time: a sweep at `now` keeps
    // exactly the entries whose age does not exceed the TTL.
    #[test]
    fn prop_sweep_uses_per_entry_age(
        offsets_ms in prop::collection::vec(0u64..3000, 1..40),
        sweep_ms in 0u64..4000
    ) {
        let base = Instant::now();
        let mut store = CacheStore::new(TEST_TTL);

        for (i, offset) in offsets_ms.iter().enumerate() {
            store.insert_at(
                format!("key_{}", i),
                offset.to_be_bytes().to_vec(),
                base + Duration::from_millis(*offset),
            );
        }

        let now = base + Duration::from_millis(sweep_ms);
        let removed = store.reap_expired_at(now);

        let mut expected_removed = 0;
        for (i, offset) in offsets_ms.iter().enumerate() {
            let expired = sweep_ms.saturating_sub(*offset) > TEST_TTL.as_millis() as u64;
            if expired {
                expected_removed += 1;
            }
            prop_assert_eq!(
                store.get(&format!("key_{}", i)).is_some(),
                !expired,
                "key_{} inserted at {}ms, swept at {}ms",
                i,
                offset,
                sweep_ms
            );
        }
        prop_assert_eq!(removed, expected_removed);
    }
}
