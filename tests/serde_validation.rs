use haywire_versioning::test_utils::clock_from_pairs;
use haywire_versioning::{VectorClock, VersionedObject, MAX_ENTRIES, MAX_NODE_ID};

#[test]
fn test_clock_survives_json() {
    let clock = clock_from_pairs([(1, 2), (4, 1)], 99);
    let json = serde_json::to_string(&clock).unwrap();
    let decoded: VectorClock = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, clock);
    assert_eq!(decoded.timestamp(), 99);
}

#[test]
fn test_unsorted_clock_is_rejected() {
    let json = r#"{"entries":[{"node_id":2,"version":1},{"node_id":1,"version":1}],"timestamp":0}"#;
    let err = serde_json::from_str::<VectorClock>(json).unwrap_err();
    assert!(err.to_string().contains("not sorted"), "{err}");
}

#[test]
fn test_zero_version_is_rejected() {
    let json = r#"{"entries":[{"node_id":1,"version":0}],"timestamp":0}"#;
    assert!(serde_json::from_str::<VectorClock>(json).is_err());
}

#[test]
fn test_out_of_range_node_is_rejected() {
    let json = r#"{"entries":[{"node_id":40000,"version":1}],"timestamp":0}"#;
    let err = serde_json::from_str::<VectorClock>(json).unwrap_err();
    assert!(err.to_string().contains("outside the allowed range"), "{err}");
}

#[test]
fn test_versioned_object_json_shape() {
    let object = VersionedObject::with_version("v".to_string(), clock_from_pairs([(3, 1)], 5));
    let value = serde_json::to_value(&object).unwrap();
    assert_eq!(value["value"], "v");
    assert_eq!(value["version"]["entries"][0]["node_id"], 3);

    let decoded: VersionedObject<String> = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, object);
}

#[test]
fn test_merged_clock_with_every_node_survives_json() {
    let almost_full = clock_from_pairs((0..MAX_NODE_ID).map(|n| (n, 1)), 0);
    let merged = almost_full.merge(&clock_from_pairs([(MAX_NODE_ID, 1)], 0));
    assert_eq!(merged.len(), MAX_ENTRIES + 1);

    let json = serde_json::to_string(&merged).unwrap();
    let decoded: VectorClock = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, merged);
}
