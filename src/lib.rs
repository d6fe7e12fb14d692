//! # Fixedstats
//!
//! A fixed-capacity integer buffer that maintains summary statistics
//! incrementally as values are appended.
//!
//! [`StatBuffer`] owns a bounded, insertion-ordered sequence of signed
//! integers and keeps minimum, maximum, range, sum, mean, mode, and
//! population standard deviation live after every append, so callers can
//! query statistics without rescanning the data.
//!
//! ## Features
//!
//! - **Bounded storage**: capacity is fixed at construction; appends past
//!   capacity are rejected with an explicit error, never silently dropped
//! - **Incremental maintenance**: extrema, sum, mean, and mode update in
//!   O(1) per append
//! - **Exact mode tracking**: a full frequency map over the inserted
//!   values, with deterministic first-to-reach-frequency tie-breaking
//! - **Batch construction**: build a full buffer from an existing slice
//!   in a single O(n) pass
//!
//! ## Quick Start
//!
//! ```rust
//! use fixedstats::prelude::*;
//!
//! // Track one value per day of a month
//! let mut daily = StatBuffer::new();
//! for close in [101, 99, 104, 99] {
//!     daily.append(close)?;
//! }
//!
//! assert_eq!(daily.min(), Some(99));
//! assert_eq!(daily.max(), Some(104));
//! assert_eq!(daily.mode(), Some(99));
//! assert!((daily.mean() - 100.75).abs() < 1e-9);
//! # Ok::<(), fixedstats::StatsError>(())
//! ```
//!
//! ## Error Handling
//!
//! Capacity and argument violations are usage errors surfaced as
//! [`StatsError`](traits::StatsError) values. A rejected append leaves
//! the buffer untouched, so callers can recover by reducing the batch or
//! allocating a larger buffer:
//!
//! ```rust
//! use fixedstats::{StatBuffer, StatsError};
//!
//! let mut buf = StatBuffer::with_capacity(1);
//! buf.append(7).unwrap();
//!
//! match buf.append(8) {
//!     Err(StatsError::CapacityExceeded { capacity, .. }) => {
//!         assert_eq!(capacity, 1);
//!     }
//!     other => panic!("expected rejection, got {:?}", other),
//! }
//! assert_eq!(buf.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization of buffer snapshots

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits and errors always available
pub mod traits;

pub mod buffer;

pub(crate) mod math;

pub mod prelude {
    pub use crate::buffer::StatBuffer;
    pub use crate::traits::{Accumulator, StatsError, SummaryStats};
}

pub use buffer::StatBuffer;
pub use traits::StatsError;
