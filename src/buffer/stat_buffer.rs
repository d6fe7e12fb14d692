//! Fixed-capacity buffer with eagerly maintained summary statistics
//!
//! Stores up to `capacity` signed integers in insertion order while keeping
//! min, max, sum, mean, mode, and population standard deviation current
//! after every append.

use crate::math;
use crate::traits::{Accumulator, StatsError, SummaryStats};

#[cfg(feature = "std")]
use std::{collections::HashMap, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap as HashMap, vec::Vec};

/// Fixed-capacity integer buffer with live summary statistics
///
/// The buffer has two states: **growing** (appends accepted) and **full**
/// (every further append rejected with
/// [`CapacityExceeded`](StatsError::CapacityExceeded)). Capacity is fixed
/// at construction and the buffer never shrinks, so once full it stays
/// full. All statistics queries are O(1).
///
/// Extrema, sum, mean, and mode are updated in O(1) per append. The
/// standard deviation is recomputed over the stored values on each
/// append, which is O(n) but cheap at the bounded sizes this structure
/// targets (the default capacity is 31, one slot per day of a month).
///
/// # Example
///
/// ```
/// use fixedstats::buffer::StatBuffer;
///
/// let mut buf = StatBuffer::with_capacity(8);
///
/// for value in [2, 4, 4, 4, 5, 5, 7, 9] {
///     buf.append(value)?;
/// }
///
/// assert_eq!(buf.min(), Some(2));
/// assert_eq!(buf.max(), Some(9));
/// assert_eq!(buf.range(), Some(7));
/// assert_eq!(buf.sum(), 40);
/// assert_eq!(buf.mode(), Some(4));
/// assert!((buf.mean() - 5.0).abs() < 1e-9);
/// assert!((buf.stddev() - 2.0).abs() < 1e-9);
/// # Ok::<(), fixedstats::StatsError>(())
/// ```
///
/// # Mode tie-breaking
///
/// The mode only moves on a strict frequency improvement, so the first
/// value to reach a given frequency level keeps the title until another
/// value exceeds it. Both the incremental path and
/// [`from_values`](StatBuffer::from_values) apply this rule, making the
/// two paths agree:
///
/// ```
/// use fixedstats::buffer::StatBuffer;
///
/// let mut buf = StatBuffer::with_capacity(4);
/// buf.append_all(&[3, 5, 3])?;
/// buf.append(5)?;
///
/// // 3 reached frequency 2 first; 5 only tied it
/// assert_eq!(buf.mode(), Some(3));
/// # Ok::<(), fixedstats::StatsError>(())
/// ```
#[derive(Clone, Debug)]
pub struct StatBuffer {
    /// Fixed maximum number of elements
    capacity: usize,
    /// Inserted values in insertion order
    values: Vec<i64>,
    /// Occurrence count per distinct value, drives the mode
    frequency: HashMap<i64, u64>,
    /// Current mode candidate
    mode_value: Option<i64>,
    /// Occurrences of the mode candidate
    mode_count: u64,
    /// Smallest inserted value
    min: i64,
    /// Largest inserted value
    max: i64,
    /// Running total
    sum: i64,
    /// Running arithmetic mean
    mean: f64,
    /// Population standard deviation, recomputed on every append
    stddev: f64,
}

/// One slot per day of the longest month
const DEFAULT_CAPACITY: usize = 31;

impl Default for StatBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl StatBuffer {
    /// Create an empty buffer with the default capacity of 31
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer with the given capacity
    ///
    /// A capacity of 0 is accepted and yields a buffer that is already
    /// full, rejecting every append.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            values: Vec::with_capacity(capacity),
            frequency: HashMap::new(),
            mode_value: None,
            mode_count: 0,
            min: i64::MAX,
            max: i64::MIN,
            sum: 0,
            mean: 0.0,
            stddev: 0.0,
        }
    }

    /// Build a full buffer from an existing sequence
    ///
    /// Capacity equals the input length and every slot counts as valid
    /// data, so the buffer starts in the full state. All statistics are
    /// computed in a single pass over the input.
    ///
    /// Returns [`InvalidArgument`](StatsError::InvalidArgument) for an
    /// empty input: a zero-length buffer has no defined extrema or mean.
    ///
    /// # Example
    ///
    /// ```
    /// use fixedstats::buffer::StatBuffer;
    ///
    /// let buf = StatBuffer::from_values(&[4, 1, 4, 9, 1])?;
    ///
    /// assert_eq!(buf.len(), 5);
    /// assert_eq!(buf.capacity(), 5);
    /// assert_eq!(buf.sum(), 19);
    /// assert_eq!(buf.mode(), Some(4));
    /// assert!(buf.is_full());
    /// # Ok::<(), fixedstats::StatsError>(())
    /// ```
    pub fn from_values(values: &[i64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::InvalidArgument {
                reason: "empty input sequence".into(),
            });
        }

        let mut buf = Self::with_capacity(values.len());
        for &value in values {
            buf.values.push(value);
            if value < buf.min {
                buf.min = value;
            }
            if value > buf.max {
                buf.max = value;
            }
            buf.sum += value;
            buf.bump_frequency(value);
        }

        // Mean and stddev depend on the final count, compute them once
        buf.mean = buf.sum as f64 / buf.values.len() as f64;
        buf.stddev = buf.compute_stddev();

        Ok(buf)
    }

    /// Append a single value
    ///
    /// Fails with [`CapacityExceeded`](StatsError::CapacityExceeded) when
    /// the buffer is full, leaving its state untouched. On success every
    /// derived statistic is brought current before returning.
    pub fn append(&mut self, value: i64) -> Result<(), StatsError> {
        if self.values.len() == self.capacity {
            return Err(StatsError::CapacityExceeded {
                capacity: self.capacity,
                len: self.values.len(),
                requested: 1,
            });
        }

        self.values.push(value);

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }

        self.sum += value;
        self.mean = self.sum as f64 / self.values.len() as f64;
        self.bump_frequency(value);
        self.stddev = self.compute_stddev();

        Ok(())
    }

    /// Append a batch of values in input order
    ///
    /// The batch is checked up front and rejected atomically: on failure
    /// no element is inserted. A batch that would exactly fill the buffer
    /// is also rejected — the historical boundary is
    /// `len + batch >= capacity`, so batch appends always leave at least
    /// one slot free (single appends can still reach the full state).
    pub fn append_all(&mut self, values: &[i64]) -> Result<(), StatsError> {
        if self.values.len() + values.len() >= self.capacity {
            return Err(StatsError::CapacityExceeded {
                capacity: self.capacity,
                len: self.values.len(),
                requested: values.len(),
            });
        }

        for &value in values {
            self.append(value)?;
        }
        Ok(())
    }

    /// Count one occurrence of `value` and re-evaluate the mode
    ///
    /// The mode only moves on a strict improvement. On a frequency tie
    /// the incumbent keeps the title, which makes the first value to
    /// reach any frequency level the deterministic winner.
    fn bump_frequency(&mut self, value: i64) {
        let occurrences = self.frequency.entry(value).or_insert(0);
        *occurrences += 1;

        if *occurrences > self.mode_count {
            self.mode_count = *occurrences;
            self.mode_value = Some(value);
        }
    }

    /// Population standard deviation over the stored values
    fn compute_stddev(&self) -> f64 {
        let n = self.values.len();
        if n == 0 {
            return 0.0;
        }

        let mut sq_dev = 0.0;
        for &value in &self.values {
            let delta = value as f64 - self.mean;
            sq_dev += delta * delta;
        }
        math::sqrt(sq_dev / n as f64)
    }

    /// Fixed capacity set at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values inserted so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no values have been inserted
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if every slot is used, so appends are rejected
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Slots still available for single appends
    pub fn remaining(&self) -> usize {
        self.capacity - self.values.len()
    }

    /// The inserted values in insertion order
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Smallest inserted value
    pub fn min(&self) -> Option<i64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.min)
        }
    }

    /// Largest inserted value
    pub fn max(&self) -> Option<i64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.max)
        }
    }

    /// Spread between largest and smallest inserted value
    pub fn range(&self) -> Option<i64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.max - self.min)
        }
    }

    /// Sum of all inserted values
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Arithmetic mean of inserted values
    ///
    /// Returns 0.0 while the buffer is empty.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.mean
        }
    }

    /// Population variance of inserted values
    pub fn variance(&self) -> f64 {
        self.stddev * self.stddev
    }

    /// Population standard deviation of inserted values
    ///
    /// Computed with denominator `count`, not `count - 1`.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Most frequent inserted value
    ///
    /// Returns `None` while the maximum observed frequency is 1: a value
    /// that occurred once is not a mode. Ties resolve to the value that
    /// reached the winning frequency first.
    pub fn mode(&self) -> Option<i64> {
        if self.mode_count <= 1 {
            None
        } else {
            self.mode_value
        }
    }

    /// Memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.values.capacity() * core::mem::size_of::<i64>()
            + self.frequency.len() * core::mem::size_of::<(i64, u64)>()
    }
}

/// Renders only the inserted values, never the unused slots
impl core::fmt::Display for StatBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl Accumulator for StatBuffer {
    type Item = i64;

    fn insert(&mut self, item: i64) -> Result<(), StatsError> {
        self.append(item)
    }

    fn count(&self) -> usize {
        self.values.len()
    }

    fn size_bytes(&self) -> usize {
        StatBuffer::size_bytes(self)
    }
}

impl SummaryStats for StatBuffer {
    type Value = i64;

    fn min(&self) -> Option<i64> {
        StatBuffer::min(self)
    }

    fn max(&self) -> Option<i64> {
        StatBuffer::max(self)
    }

    fn range(&self) -> Option<i64> {
        StatBuffer::range(self)
    }

    fn sum(&self) -> i64 {
        StatBuffer::sum(self)
    }

    fn mean(&self) -> f64 {
        StatBuffer::mean(self)
    }

    fn stddev(&self) -> f64 {
        StatBuffer::stddev(self)
    }

    fn mode(&self) -> Option<i64> {
        StatBuffer::mode(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatBuffer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        // Statistics are derivable from the values, only the shape is kept
        let mut state = serializer.serialize_struct("StatBuffer", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("values", &self.values)?;
        state.end()
    }
}
