//!
//! Defines error types for vector clock and versioned object operations.
//!
//! Every error here is deterministic: the same inputs always produce the same
//! error, so nothing is retried and nothing is logged in place of returning.

use crate::types::NodeId;

/// Errors raised by clock construction, increment and comparison.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The node id is negative or larger than `MAX_NODE_ID`.
    #[error("node id {node_id} is outside the allowed range")]
    NodeIdOutOfRange { node_id: i64 },
    /// A clock entry was given a negative version counter.
    #[error("version {version} must not be negative")]
    NegativeVersion { version: i64 },
    /// The clock already tracks the maximum number of distinct nodes.
    #[error("vector clock is full ({max} entries)")]
    CapacityExceeded { max: usize },
    /// Incrementing the counter for a node would overflow.
    #[error("version counter for node {node_id} overflowed")]
    VersionOverflow { node_id: NodeId },
    /// The two operands use different version schemes.
    #[error("cannot compare versions of different kinds")]
    IncompatibleVersions,
    /// One of the operands of a comparison is absent.
    #[error("cannot compare against an absent version")]
    MissingOperand,
    /// An explicit entry list is not strictly ascending by node id.
    #[error("entries are not sorted: node {next} follows node {previous}")]
    UnsortedEntries { previous: NodeId, next: NodeId },
    /// An explicit entry list names the same node twice.
    #[error("node {node_id} appears more than once")]
    DuplicateNode { node_id: NodeId },
    /// An explicit entry list carries a zero version, which a clock never stores.
    #[error("node {node_id} has a zero version")]
    ZeroVersion { node_id: NodeId },
}
