//! A single replica's contribution to a vector clock.

use crate::error::ClockError;
use crate::time::repr::EntryRepr;
use crate::types::{is_valid_node_id, NodeId};
use std::fmt;

/// Immutable `(node id, version)` pair.
///
/// Equality and hashing are structural on both fields. Entries are `Copy`, so
/// "cloning" an entry is a plain copy and never shares state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "EntryRepr", into = "EntryRepr")]
pub struct ClockEntry {
    node_id: NodeId,
    version: u64,
}

impl ClockEntry {
    /// Creates an entry, rejecting node ids above `MAX_NODE_ID`.
    pub fn new(node_id: NodeId, version: u64) -> Result<Self, ClockError> {
        if !is_valid_node_id(i64::from(node_id)) {
            return Err(ClockError::NodeIdOutOfRange {
                node_id: i64::from(node_id),
            });
        }
        Ok(ClockEntry { node_id, version })
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns a new entry for the same node with the version bumped by one.
    /// The receiver is left untouched.
    pub fn increment(&self) -> Result<Self, ClockError> {
        let version = self
            .version
            .checked_add(1)
            .ok_or(ClockError::VersionOverflow {
                node_id: self.node_id,
            })?;
        Ok(ClockEntry {
            node_id: self.node_id,
            version,
        })
    }
}

/// Builds an entry from signed inputs, e.g. values read back from a store that
/// uses signed integer columns.
impl TryFrom<(i64, i64)> for ClockEntry {
    type Error = ClockError;

    fn try_from((node_id, version): (i64, i64)) -> Result<Self, Self::Error> {
        if !is_valid_node_id(node_id) {
            return Err(ClockError::NodeIdOutOfRange { node_id });
        }
        let version = u64::try_from(version).map_err(|_| ClockError::NegativeVersion { version })?;
        ClockEntry::new(node_id as NodeId, version)
    }
}

impl TryFrom<EntryRepr> for ClockEntry {
    type Error = ClockError;

    fn try_from(repr: EntryRepr) -> Result<Self, Self::Error> {
        ClockEntry::new(repr.node_id, repr.version)
    }
}

impl From<ClockEntry> for EntryRepr {
    fn from(entry: ClockEntry) -> Self {
        EntryRepr {
            node_id: entry.node_id,
            version: entry.version,
        }
    }
}

impl fmt::Display for ClockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node_id, self.version)
    }
}
