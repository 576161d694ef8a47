//! Advisory timestamp sources.
//!
//! A clock stores whatever reading its caller supplies. These helpers only
//! provide a default reading for freshly created clocks and replicas.

use crate::types::Timestamp;

/// A function returning the current advisory time. Any integer-valued reading
/// works; correctness of causal ordering never depends on it.
pub type TimeSource = fn() -> Timestamp;

/// Milliseconds since the Unix epoch, or `0` if the system clock reads before it.
pub fn system_time_ms() -> Timestamp {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| Timestamp::try_from(d.as_millis()).unwrap_or(Timestamp::MAX))
        .unwrap_or_default()
}
