#![no_main]

// Harness: arbitrary increment sequences on two branches, then checks the
// compare/merge invariants on the result.

use arbitrary::Arbitrary;
use haywire_versioning::{ClockError, Occured, VectorClock, MAX_NODE_ID};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone)]
enum Op {
    Left(u16, i64),
    Right(u16, i64),
    Fork,
}

fn apply(clock: &mut VectorClock, node_id: u16, timestamp: i64) {
    match clock.increment_version(node_id, timestamp) {
        Ok(()) => assert!(node_id <= MAX_NODE_ID),
        Err(ClockError::NodeIdOutOfRange { .. }) => assert!(node_id > MAX_NODE_ID),
        Err(e) => panic!("unexpected error: {e}"),
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut left = VectorClock::with_timestamp(0);
    let mut right = VectorClock::with_timestamp(0);

    for op in ops.into_iter().take(256) {
        match op {
            Op::Left(n, t) => apply(&mut left, n, t),
            Op::Right(n, t) => apply(&mut right, n, t),
            Op::Fork => right = left.clone(),
        }
    }

    assert!(left.entries().windows(2).all(|w| w[0].node_id() < w[1].node_id()));
    assert!(right.entries().windows(2).all(|w| w[0].node_id() < w[1].node_id()));

    let forward = left.compare(&right);
    let backward = right.compare(&left);
    if left == right {
        assert_eq!(forward, Occured::Before);
        assert_eq!(backward, Occured::Before);
    } else {
        assert_eq!(forward, backward.reverse());
    }

    let merged = left.merge(&right);
    assert_eq!(merged, right.merge(&left));
    assert_ne!(left.compare(&merged), Occured::After);
    assert_ne!(right.compare(&merged), Occured::After);
});
