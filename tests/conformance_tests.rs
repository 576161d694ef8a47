use haywire_versioning::test_utils::{clock_from_pairs, init_tracing};
use haywire_versioning::{
    ClockEntry, ClockError, HappenedBeforeComparator, NodeId, Occured, Replica, VectorClock, Version,
    VersionedObject, MAX_NODE_ID,
};

const NODE_1: NodeId = 1;
const NODE_2: NodeId = 2;

fn pairs(clock: &VectorClock) -> Vec<(NodeId, u64)> {
    clock.entries().iter().map(|e| (e.node_id(), e.version())).collect()
}

#[test]
fn test_branching_clocks_are_concurrent_and_merge() {
    init_tracing();

    let mut a = VectorClock::with_timestamp(0);
    a.increment_version(NODE_1, 1).unwrap();
    assert_eq!(pairs(&a), vec![(1, 1)]);

    let mut b = a.clone();
    a.increment_version(NODE_1, 2).unwrap();
    b.increment_version(NODE_2, 3).unwrap();
    assert_eq!(pairs(&a), vec![(1, 2)]);
    assert_eq!(pairs(&b), vec![(1, 1), (2, 1)]);

    assert_eq!(a.compare(&b), Occured::Concurrently);
    assert_eq!(b.compare(&a), Occured::Concurrently);

    let merged = a.merge(&b);
    assert_eq!(pairs(&merged), vec![(1, 2), (2, 1)]);
    assert_eq!(a.compare(&merged), Occured::Before);
    assert_eq!(b.compare(&merged), Occured::Before);
}

#[test]
fn test_versioned_objects_from_same_ancestor_conflict() {
    init_tracing();

    let mut version1 = VersionedObject::new(0);
    version1.value = 1;
    version1.increment_version(NODE_1, 100).unwrap();

    let mut version2 = version1.clone();

    version1.value = 2;
    version1.increment_version(NODE_1, 200).unwrap();

    version2.value = 2;
    version2.increment_version(NODE_2, 201).unwrap();

    let result = HappenedBeforeComparator.compare(&version1, &version2);
    assert_eq!(Occured::from(result), Occured::Concurrently);
}

#[test]
fn test_incrementing_same_node_twice_adds_two() {
    let mut clock = clock_from_pairs([(3, 4), (5, 1)], 0);
    clock.increment_version(5, 1).unwrap();
    clock.increment_version(5, 2).unwrap();
    assert_eq!(pairs(&clock), vec![(3, 4), (5, 3)]);
}

#[test]
fn test_identical_clocks_compare_before_but_are_equal() {
    let clock = clock_from_pairs([(1, 2), (2, 3)], 5);
    let copy = clock.clone();
    assert_eq!(clock, copy);
    assert_eq!(clock.compare(&copy), Occured::Before);
    assert!(!clock.happened_before(&copy));
}

#[test]
fn test_range_errors_surface_to_caller() {
    let mut clock = VectorClock::with_timestamp(0);
    assert_eq!(
        clock.increment_version(MAX_NODE_ID + 1, 0),
        Err(ClockError::NodeIdOutOfRange { node_id: i64::from(MAX_NODE_ID) + 1 })
    );
    assert!(clock.is_empty());

    assert_eq!(
        ClockEntry::try_from((-3, 1)),
        Err(ClockError::NodeIdOutOfRange { node_id: -3 })
    );
    assert_eq!(
        ClockEntry::try_from((3, -1)),
        Err(ClockError::NegativeVersion { version: -1 })
    );
}

#[test]
fn test_absent_operand_is_rejected() {
    let version = Version::from(clock_from_pairs([(1, 1)], 0));
    assert_eq!(
        Version::compare_optional(Some(&version), None),
        Err(ClockError::MissingOperand)
    );
}

#[test]
fn test_replicas_write_conflict_and_reconcile() {
    init_tracing();

    fn t() -> i64 {
        7
    }
    let r1 = Replica::with_time_source(NODE_1, t).unwrap();
    let r2 = Replica::with_time_source(NODE_2, t).unwrap();

    let base = r1.write(&VersionedObject::with_version("", VectorClock::with_timestamp(0)), "base").unwrap();
    let left = r1.write(&base, "left").unwrap();
    let right = r2.write(&base, "right").unwrap();

    assert_eq!(base.compare(&left), Occured::Before);
    assert_eq!(base.compare(&right), Occured::Before);
    assert_eq!(left.compare(&right), Occured::Concurrently);

    let resolved = r2.reconcile(&left, &right, "left+right").unwrap();
    assert_eq!(pairs(&resolved.version), vec![(1, 2), (2, 2)]);
    assert_eq!(resolved.version.timestamp(), 7);
    assert_eq!(left.compare(&resolved), Occured::Before);
    assert_eq!(right.compare(&resolved), Occured::Before);
}
