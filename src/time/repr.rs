// Serde shapes for the clock types. Decoding goes through the validating
// constructors, so a deserialised clock always upholds its invariants.

use crate::time::entry::ClockEntry;
use crate::types::{NodeId, Timestamp};

#[derive(serde::Serialize, serde::Deserialize)]
pub struct EntryRepr {
    pub node_id: NodeId,
    pub version: u64,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ClockRepr {
    pub entries: Vec<ClockEntry>,
    pub timestamp: Timestamp,
}
