#![no_main]

// Harness: clocks assembled from arbitrary entry lists must either be rejected
// or satisfy the sorted/unique/non-zero invariants.

use haywire_versioning::{ClockEntry, Occured, VectorClock};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: Vec<(i64, i64)>| {
    let entries: Result<Vec<ClockEntry>, _> = raw.into_iter().map(ClockEntry::try_from).collect();
    let Ok(entries) = entries else { return };

    if let Ok(clock) = VectorClock::from_entries(entries, 0) {
        assert!(clock.entries().windows(2).all(|w| w[0].node_id() < w[1].node_id()));
        assert!(clock.entries().iter().all(|e| e.version() > 0));
        assert_eq!(clock.compare(&clock.clone()), Occured::Before);
    }
});
