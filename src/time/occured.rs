//! The causal relationship between two versions.

use std::cmp::Ordering;

/// The result of comparing two clocks: `t1` happened before `t2`, after it,
/// or concurrently with it.
///
/// This is not a total order. Identical clocks compare as [`Occured::Before`];
/// use clock equality to detect them.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Occured {
    Before = -1,
    After = 1,
    Concurrently = 0,
}

impl Occured {
    /// The relationship seen from the other operand.
    pub fn reverse(self) -> Self {
        match self {
            Occured::Before => Occured::After,
            Occured::After => Occured::Before,
            Occured::Concurrently => Occured::Concurrently,
        }
    }

    pub fn is_concurrent(self) -> bool {
        self == Occured::Concurrently
    }
}

/// Collapses `Concurrently` into `Equal`. The mapping loses information on
/// purpose; keep the `Occured` value when conflicts matter.
impl From<Occured> for Ordering {
    fn from(occured: Occured) -> Self {
        match occured {
            Occured::Before => Ordering::Less,
            Occured::After => Ordering::Greater,
            Occured::Concurrently => Ordering::Equal,
        }
    }
}

impl From<Ordering> for Occured {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Occured::Before,
            Ordering::Greater => Occured::After,
            Ordering::Equal => Occured::Concurrently,
        }
    }
}
