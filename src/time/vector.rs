//! Vector clock: per-node update counters with a partial-order comparison.
//!
//! Entries are kept sorted ascending by node id with no duplicates and no zero
//! versions (an absent node means version 0). `compare` and `merge` depend on
//! that ordering and walk both sides with two pointers instead of scanning
//! every pair.

use crate::error::ClockError;
use crate::time::entry::ClockEntry;
use crate::time::occured::Occured;
use crate::time::repr::ClockRepr;
use crate::time::source::system_time_ms;
use crate::types::{is_valid_node_id, NodeId, Timestamp, MAX_ENTRIES};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A vector clock plus the advisory timestamp of its last increment.
///
/// Equality and hashing consider only the entries; the timestamp never
/// influences ordering or equality.
///
/// Mutation happens only through [`VectorClock::increment_version`], which
/// needs `&mut self`. Everything else (`increment`, `merge`, `compare`,
/// `clone`) leaves its operands untouched, so shared `&VectorClock`s can be
/// compared from many threads at once.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ClockRepr", into = "ClockRepr")]
pub struct VectorClock {
    entries: Vec<ClockEntry>,
    timestamp: Timestamp,
}

impl VectorClock {
    /// Creates an empty clock stamped with the current system time.
    pub fn new() -> Self {
        Self::with_timestamp(system_time_ms())
    }

    /// Creates an empty clock with the given advisory timestamp.
    pub fn with_timestamp(timestamp: Timestamp) -> Self {
        VectorClock {
            entries: Vec::new(),
            timestamp,
        }
    }

    /// Creates a clock from explicit entries. The entries must already be
    /// strictly ascending by node id and carry non-zero versions; nothing is
    /// re-sorted or dropped.
    pub fn from_entries(entries: Vec<ClockEntry>, timestamp: Timestamp) -> Result<Self, ClockError> {
        VectorClockBuilder::new()
            .entries(entries)
            .timestamp(timestamp)
            .build()
    }

    pub fn builder() -> VectorClockBuilder {
        VectorClockBuilder::new()
    }

    pub fn entries(&self) -> &[ClockEntry] {
        &self.entries
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The counter recorded for `node_id`, or 0 if the node never wrote.
    pub fn version_of(&self, node_id: NodeId) -> u64 {
        self.position(node_id)
            .ok()
            .map_or(0, |index| self.entries[index].version())
    }

    fn position(&self, node_id: NodeId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&node_id, ClockEntry::node_id)
    }

    /// Increments the counter for `node_id` in place and records `timestamp`.
    ///
    /// A node seen for the first time gets version 1 at the position that
    /// keeps the entries sorted. On error the clock is left unchanged.
    pub fn increment_version(&mut self, node_id: NodeId, timestamp: Timestamp) -> Result<(), ClockError> {
        if !is_valid_node_id(i64::from(node_id)) {
            return Err(ClockError::NodeIdOutOfRange {
                node_id: i64::from(node_id),
            });
        }

        match self.position(node_id) {
            Ok(index) => {
                self.entries[index] = self.entries[index].increment()?;
            }
            Err(index) => {
                if self.entries.len() >= MAX_ENTRIES {
                    return Err(ClockError::CapacityExceeded { max: MAX_ENTRIES });
                }
                // `index == len` means the id is larger than every existing
                // one; `Vec::insert` appends in that case.
                self.entries.insert(index, ClockEntry::new(node_id, 1)?);
            }
        }
        self.timestamp = timestamp;

        tracing::trace!(node_id, timestamp, clock = %self, "incremented vector clock");
        Ok(())
    }

    /// Returns a copy of this clock incremented on `node_id`; `self` is untouched.
    pub fn increment(&self, node_id: NodeId, timestamp: Timestamp) -> Result<VectorClock, ClockError> {
        let mut copy = self.clone();
        copy.increment_version(node_id, timestamp)?;
        Ok(copy)
    }

    /// Least upper bound of two clocks: the per-node maximum of both.
    ///
    /// The result carries the later of the two advisory timestamps.
    pub fn merge(&self, other: &VectorClock) -> VectorClock {
        let mut merged = Vec::with_capacity(self.entries.len().max(other.entries.len()));
        let (mut i, mut j) = (0, 0);

        while i < self.entries.len() && j < other.entries.len() {
            let (v1, v2) = (self.entries[i], other.entries[j]);
            match v1.node_id().cmp(&v2.node_id()) {
                Ordering::Equal => {
                    merged.push(if v1.version() >= v2.version() { v1 } else { v2 });
                    i += 1;
                    j += 1;
                }
                Ordering::Less => {
                    merged.push(v1);
                    i += 1;
                }
                Ordering::Greater => {
                    merged.push(v2);
                    j += 1;
                }
            }
        }

        // Leftovers on either side have no counterpart.
        merged.extend_from_slice(&self.entries[i..]);
        merged.extend_from_slice(&other.entries[j..]);

        VectorClock {
            entries: merged,
            timestamp: self.timestamp.max(other.timestamp),
        }
    }

    /// Classifies `self` relative to `other`.
    ///
    /// * `Before` when every counter in `self` is `<=` the one in `other`.
    ///   Identical clocks also report `Before`; there is no "equal" outcome.
    /// * `After` when `self` dominates `other` and they differ.
    /// * `Concurrently` when each side has a counter the other lacks.
    pub fn compare(&self, other: &VectorClock) -> Occured {
        let mut self_bigger = false;
        let mut other_bigger = false;
        let (mut p1, mut p2) = (0, 0);

        while p1 < self.entries.len() && p2 < other.entries.len() {
            let (ver1, ver2) = (self.entries[p1], other.entries[p2]);
            match ver1.node_id().cmp(&ver2.node_id()) {
                Ordering::Equal => {
                    match ver1.version().cmp(&ver2.version()) {
                        Ordering::Greater => self_bigger = true,
                        Ordering::Less => other_bigger = true,
                        Ordering::Equal => {}
                    }
                    p1 += 1;
                    p2 += 1;
                }
                // `self` is missing the node `other` is at.
                Ordering::Greater => {
                    other_bigger = true;
                    p2 += 1;
                }
                // `other` is missing the node `self` is at.
                Ordering::Less => {
                    self_bigger = true;
                    p1 += 1;
                }
            }
        }

        if p1 < self.entries.len() {
            self_bigger = true;
        } else if p2 < other.entries.len() {
            other_bigger = true;
        }

        let occured = match (self_bigger, other_bigger) {
            (false, false) | (false, true) => Occured::Before,
            (true, false) => Occured::After,
            (true, true) => Occured::Concurrently,
        };
        if occured.is_concurrent() {
            tracing::debug!(left = %self, right = %other, "concurrent vector clocks");
        }
        occured
    }

    /// `true` only when `self` strictly precedes `other`, unlike
    /// [`compare`](Self::compare) which also reports `Before` for equal clocks.
    pub fn happened_before(&self, other: &VectorClock) -> bool {
        self.compare(other) == Occured::Before && self != other
    }

    /// `true` when neither clock dominates the other (a write conflict).
    pub fn is_concurrent_with(&self, other: &VectorClock) -> bool {
        self.compare(other).is_concurrent()
    }
}

impl Default for VectorClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for VectorClock {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for VectorClock {}

impl Hash for VectorClock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl fmt::Display for VectorClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("version(")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str(")")
    }
}

impl TryFrom<ClockRepr> for VectorClock {
    type Error = ClockError;

    fn try_from(repr: ClockRepr) -> Result<Self, Self::Error> {
        VectorClock::from_entries(repr.entries, repr.timestamp)
    }
}

impl From<VectorClock> for ClockRepr {
    fn from(clock: VectorClock) -> Self {
        ClockRepr {
            entries: clock.entries,
            timestamp: clock.timestamp,
        }
    }
}

/// Validating constructor for clocks assembled from explicit entries, e.g.
/// when a store reloads a persisted clock.
#[derive(Debug, Clone, Default)]
pub struct VectorClockBuilder {
    entries: Vec<ClockEntry>,
    timestamp: Option<Timestamp>,
}

impl VectorClockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, entry: ClockEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = ClockEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Advisory timestamp of the built clock. Defaults to the current system time.
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Checks the clock invariants and produces the clock. Entries are never
    /// re-sorted, merged or dropped to make them valid.
    pub fn build(self) -> Result<VectorClock, ClockError> {
        // Unique in-range ids bound the length at `MAX_NODE_ID + 1`, the most
        // `merge` can produce. `MAX_ENTRIES` only limits `increment_version`.
        for entry in &self.entries {
            if entry.version() == 0 {
                return Err(ClockError::ZeroVersion {
                    node_id: entry.node_id(),
                });
            }
        }
        for pair in self.entries.windows(2) {
            let (previous, next) = (pair[0].node_id(), pair[1].node_id());
            match previous.cmp(&next) {
                Ordering::Less => {}
                Ordering::Equal => return Err(ClockError::DuplicateNode { node_id: next }),
                Ordering::Greater => return Err(ClockError::UnsortedEntries { previous, next }),
            }
        }

        let clock = VectorClock {
            entries: self.entries,
            timestamp: self.timestamp.unwrap_or_else(system_time_ms),
        };
        tracing::trace!(clock = %clock, "built vector clock from entries");
        Ok(clock)
    }
}
