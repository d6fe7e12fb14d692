//! Core traits and errors for statistics accumulators
//!
//! Accumulators implement the base [`Accumulator`] trait for fallible
//! insertion, with [`SummaryStats`] layered on top for the derived-statistic
//! query surface.

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error from a buffer construction or append operation
///
/// Both variants are usage errors: the operation is rejected without
/// mutating the buffer, and the caller must adjust its input before
/// retrying. There is no internal recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Construction was handed an unusable input sequence
    InvalidArgument {
        reason: String,
    },
    /// Append attempted with insufficient remaining capacity
    CapacityExceeded {
        /// Fixed capacity of the buffer
        capacity: usize,
        /// Elements already inserted
        len: usize,
        /// Elements the rejected operation tried to insert
        requested: usize,
    },
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidArgument { reason } => {
                write!(f, "invalid argument: {}", reason)
            }
            StatsError::CapacityExceeded {
                capacity,
                len,
                requested,
            } => {
                write!(
                    f,
                    "capacity exceeded: {} requested with {} of {} slots used",
                    requested, len, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Core trait for bounded statistics accumulators
pub trait Accumulator: Clone + Debug {
    /// The type of item this accumulator processes
    type Item;

    /// Insert an item, rejecting it if no room remains
    fn insert(&mut self, item: Self::Item) -> Result<(), StatsError>;

    /// Number of items inserted so far
    fn count(&self) -> usize;

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Check if the accumulator holds no items
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Summary-statistic queries over an accumulator
///
/// All methods are O(1): the implementor maintains these statistics as
/// items arrive rather than deriving them on demand.
pub trait SummaryStats: Accumulator {
    /// The value type the statistics range over
    type Value: PartialOrd + Copy;

    /// Smallest inserted value, `None` while empty
    fn min(&self) -> Option<Self::Value>;

    /// Largest inserted value, `None` while empty
    fn max(&self) -> Option<Self::Value>;

    /// Spread between largest and smallest value, `None` while empty
    fn range(&self) -> Option<Self::Value>;

    /// Sum of all inserted values
    fn sum(&self) -> Self::Value;

    /// Arithmetic mean of inserted values (0.0 while empty)
    fn mean(&self) -> f64;

    /// Population standard deviation of inserted values
    fn stddev(&self) -> f64;

    /// Most frequent inserted value
    ///
    /// `None` when no value has occurred more than once — a single
    /// occurrence does not make a mode.
    fn mode(&self) -> Option<Self::Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::CapacityExceeded {
            capacity: 5,
            len: 5,
            requested: 1,
        };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: 1 requested with 5 of 5 slots used"
        );

        let err = StatsError::InvalidArgument {
            reason: "empty input sequence".into(),
        };
        assert_eq!(err.to_string(), "invalid argument: empty input sequence");
    }
}
