//!
//! Application values paired with the vector clock that versions them.
//!
//! A replica keeps one `VersionedObject` per logical key. Local writes advance
//! the replica's own entry; versions received from peers are classified with
//! [`VersionedObject::compare`] and concurrent ones are left for the caller to
//! reconcile.

use crate::error::ClockError;
use crate::time::{Occured, VectorClock};
use crate::types::{NodeId, Timestamp};
use crate::version::Version;
use std::cmp::Ordering;
use std::fmt;

/// A value and its version.
///
/// Equality is structural on both fields: same value and same clock entries.
/// It is not a causal comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct VersionedObject<T> {
    pub value: T,
    pub version: VectorClock,
}

impl<T> VersionedObject<T> {
    /// Wraps `value` with a fresh, empty clock.
    pub fn new(value: T) -> Self {
        Self::with_version(value, VectorClock::new())
    }

    pub fn with_version(value: T, version: VectorClock) -> Self {
        VersionedObject { value, version }
    }

    /// Wraps `value` with a version of any scheme; an absent version yields a
    /// fresh, empty clock.
    pub fn from_version(value: T, version: Option<Version>) -> Result<Self, ClockError> {
        let clock = match version {
            Some(version) => VectorClock::try_from(version)?,
            None => VectorClock::new(),
        };
        Ok(Self::with_version(value, clock))
    }

    /// Advances this object's clock on `node_id` in place.
    pub fn increment_version(&mut self, node_id: NodeId, timestamp: Timestamp) -> Result<(), ClockError> {
        self.version.increment_version(node_id, timestamp)
    }

    /// Causal relationship between this object's version and `other`'s.
    pub fn compare(&self, other: &VersionedObject<T>) -> Occured {
        self.version.compare(&other.version)
    }

    pub fn into_parts(self) -> (T, VectorClock) {
        (self.value, self.version)
    }
}

impl<T: fmt::Display> fmt::Display for VersionedObject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.value, self.version)
    }
}

/// Orders versioned objects by happened-before.
///
/// [`compare`](Self::compare) maps `Before` to `Less`, `After` to `Greater`
/// and `Concurrently` to `Equal`. Identical clocks compare `Before`, so they
/// map to `Less` in both directions, and `Equal` means "conflicting", not
/// "same". The mapping is not a total order: passing it to `slice::sort_by`
/// or a sorted container can panic or misorder once the input holds
/// concurrent or identical versions. Use [`VersionedObject::compare`] to
/// classify pairs, and [`compare_total`](Self::compare_total) to sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct HappenedBeforeComparator;

impl HappenedBeforeComparator {
    pub fn compare<T>(&self, x: &VersionedObject<T>, y: &VersionedObject<T>) -> Ordering {
        Ordering::from(x.compare(y))
    }

    /// A total order that agrees with happened-before: if `x` strictly
    /// precedes `y` the result is `Less`. Unrelated versions are ordered by
    /// their counter sum, then by entries. Safe for `sort_by`.
    pub fn compare_total<T>(&self, x: &VersionedObject<T>, y: &VersionedObject<T>) -> Ordering {
        fn weight(clock: &VectorClock) -> u128 {
            clock.entries().iter().map(|e| u128::from(e.version())).sum()
        }
        fn pairs(clock: &VectorClock) -> impl Iterator<Item = (NodeId, u64)> + '_ {
            clock.entries().iter().map(|e| (e.node_id(), e.version()))
        }

        weight(&x.version)
            .cmp(&weight(&y.version))
            .then_with(|| pairs(&x.version).cmp(pairs(&y.version)))
    }
}
