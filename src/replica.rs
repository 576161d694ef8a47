//! A writer identity: one node id plus the source of its advisory timestamps.
//!
//! `Replica` performs the two clock updates a store makes on behalf of a node:
//! a local write (advance the node's own entry) and a reconciliation of
//! concurrent versions (join both clocks, then advance). Both are pure: the
//! input versions are never modified, so earlier versions stay valid snapshots.

use crate::error::ClockError;
use crate::time::{system_time_ms, TimeSource, VectorClock};
use crate::types::{is_valid_node_id, NodeId, Timestamp};
use crate::versioned::VersionedObject;

#[derive(Debug, Clone, Copy)]
pub struct Replica {
    node_id: NodeId,
    time_source: TimeSource,
}

impl Replica {
    /// Creates a replica that stamps clocks with the system time.
    pub fn new(node_id: NodeId) -> Result<Self, ClockError> {
        Self::with_time_source(node_id, system_time_ms)
    }

    /// Creates a replica with a custom timestamp source.
    pub fn with_time_source(node_id: NodeId, time_source: TimeSource) -> Result<Self, ClockError> {
        if !is_valid_node_id(i64::from(node_id)) {
            return Err(ClockError::NodeIdOutOfRange {
                node_id: i64::from(node_id),
            });
        }
        Ok(Replica { node_id, time_source })
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn now(&self) -> Timestamp {
        (self.time_source)()
    }

    /// Returns `clock` advanced on this replica's entry.
    pub fn stamp(&self, clock: &VectorClock) -> Result<VectorClock, ClockError> {
        clock.increment(self.node_id, self.now())
    }

    /// Produces the successor of `current` holding `value`.
    pub fn write<T>(&self, current: &VersionedObject<T>, value: T) -> Result<VersionedObject<T>, ClockError> {
        let version = self.stamp(&current.version)?;
        tracing::trace!(node_id = self.node_id, version = %version, "local write");
        Ok(VersionedObject::with_version(value, version))
    }

    /// Produces a version of `value` that supersedes both `left` and `right`.
    ///
    /// Choosing `value` is the caller's business; this only builds the clock.
    /// Works for any pair, concurrent or not.
    pub fn reconcile<T>(
        &self,
        left: &VersionedObject<T>,
        right: &VersionedObject<T>,
        value: T,
    ) -> Result<VersionedObject<T>, ClockError> {
        let joined = left.version.merge(&right.version);
        let version = self.stamp(&joined)?;
        tracing::debug!(
            node_id = self.node_id,
            left = %left.version,
            right = %right.version,
            version = %version,
            "reconciled versions"
        );
        Ok(VersionedObject::with_version(value, version))
    }
}
