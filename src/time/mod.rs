//! Logical-time utilities: clock entries, vector clocks and their comparison.
//!
//! Vector-clock logic lives in `time::vector`; timestamps attached to clocks
//! are advisory and come from `time::source`.

pub mod entry;
pub mod occured;
pub mod source;
pub mod vector;

mod repr;

// Re-export for convenience
pub use entry::ClockEntry;
pub use occured::Occured;
pub use source::{system_time_ms, TimeSource};
pub use vector::{VectorClock, VectorClockBuilder};
