//! Closed set of version schemes.
//!
//! A version answers one question: did it happen before, after, or
//! concurrently with another version. Vector clocks are currently the only
//! scheme; further schemes get their own variant here instead of being
//! discovered through run-time type inspection.

use crate::error::ClockError;
use crate::time::{Occured, VectorClock};

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum Version {
    Vector(VectorClock),
}

impl Version {
    /// Compares two versions of the same scheme. Versions of different
    /// schemes have no causal relationship and yield
    /// [`ClockError::IncompatibleVersions`].
    #[allow(unreachable_patterns)]
    pub fn compare(&self, other: &Version) -> Result<Occured, ClockError> {
        match (self, other) {
            (Version::Vector(a), Version::Vector(b)) => Ok(a.compare(b)),
            _ => Err(ClockError::IncompatibleVersions),
        }
    }

    /// Like [`compare`](Self::compare), for operands that may be absent.
    pub fn compare_optional(lhs: Option<&Version>, rhs: Option<&Version>) -> Result<Occured, ClockError> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => a.compare(b),
            _ => Err(ClockError::MissingOperand),
        }
    }

    pub fn as_vector_clock(&self) -> Option<&VectorClock> {
        match self {
            Version::Vector(clock) => Some(clock),
        }
    }
}

impl From<VectorClock> for Version {
    fn from(clock: VectorClock) -> Self {
        Version::Vector(clock)
    }
}

impl TryFrom<Version> for VectorClock {
    type Error = ClockError;

    #[allow(unreachable_patterns)]
    fn try_from(version: Version) -> Result<Self, Self::Error> {
        match version {
            Version::Vector(clock) => Ok(clock),
            _ => Err(ClockError::IncompatibleVersions),
        }
    }
}
