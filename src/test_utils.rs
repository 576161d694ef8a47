//! Helpers shared by integration tests, benches and fuzzing.
//! Only compiled with the `test-utils` feature.

use crate::time::{ClockEntry, VectorClock};
use crate::types::{NodeId, MAX_NODE_ID};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Installs a `tracing` subscriber writing to the test harness output.
/// Respects `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a clock from `(node, version)` pairs in any order. Zero versions are
/// skipped and repeated nodes keep the last version, so the result always
/// satisfies the clock invariants.
pub fn clock_from_pairs(pairs: impl IntoIterator<Item = (NodeId, u64)>, timestamp: i64) -> VectorClock {
    let map: BTreeMap<NodeId, u64> = pairs.into_iter().filter(|&(_, v)| v > 0).collect();
    let entries = map
        .into_iter()
        .map(|(n, v)| ClockEntry::new(n, v).expect("node id in range"));
    VectorClock::builder()
        .entries(entries)
        .timestamp(timestamp)
        .build()
        .expect("entries are sorted and non-zero")
}

/// Node ids drawn from a small range so generated clocks overlap often.
pub fn arb_node_id() -> impl Strategy<Value = NodeId> {
    0..16 as NodeId
}

/// Any valid node id.
pub fn arb_any_node_id() -> impl Strategy<Value = NodeId> {
    0..=MAX_NODE_ID
}

/// Clocks with 0 to 8 entries and small counters.
pub fn arb_vector_clock() -> impl Strategy<Value = VectorClock> {
    (
        prop::collection::vec((arb_node_id(), 1..20u64), 0..8),
        any::<i64>(),
    )
        .prop_map(|(pairs, timestamp)| clock_from_pairs(pairs, timestamp))
}
