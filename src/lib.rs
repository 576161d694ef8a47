#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Haywire versioning: causality tracking for eventually-consistent replicas.
//!
//! A [`VectorClock`] records one update counter per node. Comparing two clocks
//! tells whether one version of an object happened before the other, after
//! it, or concurrently (a write conflict). [`VersionedObject`] pairs a value
//! with its clock, and [`Replica`] applies a node's local writes.
//!
//! The crate has no I/O. Storage, replication and conflict-resolution policy
//! belong to the surrounding store.
//!
//! ```
//! use haywire_versioning::{Occured, VectorClock};
//!
//! let mut a = VectorClock::with_timestamp(0);
//! a.increment_version(1, 1).unwrap();
//! let mut b = a.clone();
//! a.increment_version(1, 2).unwrap();
//! b.increment_version(2, 3).unwrap();
//!
//! assert_eq!(a.compare(&b), Occured::Concurrently);
//! assert_eq!(a.merge(&b).to_string(), "version(1:2, 2:1)");
//! ```

// Shared scalar types and limits (NodeId, Timestamp, MAX_NODE_ID).
pub mod types;

// Crate error type.
pub mod error;

// Clock entries, vector clocks and the Occured result.
pub mod time;

// Closed set of version schemes.
pub mod version;

// Values paired with their clocks.
pub mod versioned;

// Local writes and reconciliation for a single node.
pub mod replica;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::ClockError;
pub use replica::Replica;
pub use time::{ClockEntry, Occured, VectorClock, VectorClockBuilder};
pub use types::{NodeId, Timestamp, MAX_ENTRIES, MAX_NODE_ID};
pub use version::Version;
pub use versioned::{HappenedBeforeComparator, VersionedObject};
