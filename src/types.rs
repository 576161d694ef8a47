//!
//! Shared scalar types and limits used across the versioning modules.
//!
//! Node identifiers are assigned and persisted by the surrounding
//! cluster-membership component; this crate only enforces their range.

/// Identifier of a replica that writes to a versioned object.
///
/// Valid identifiers are `0..=MAX_NODE_ID`. The type is wider than the
/// allowed range, so every entry point that accepts a `NodeId` checks it.
pub type NodeId = u16;

/// Advisory wall-clock reading stored alongside a vector clock.
/// Never consulted when ordering versions.
pub type Timestamp = i64;

/// Largest node identifier a clock accepts (the signed 16-bit maximum).
pub const MAX_NODE_ID: NodeId = i16::MAX as NodeId;

/// Upper bound on the distinct node entries `increment_version` will grow a
/// clock to. A merge of two clocks may hold one more, one entry per valid id.
pub const MAX_ENTRIES: usize = MAX_NODE_ID as usize;

/// Returns `true` when `node_id` lies in the accepted id space.
#[inline]
pub fn is_valid_node_id(node_id: i64) -> bool {
    (0..=i64::from(MAX_NODE_ID)).contains(&node_id)
}
