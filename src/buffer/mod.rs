//! Fixed-capacity statistics buffer
//!
//! This module provides a bounded buffer over signed integers that keeps
//! its summary statistics current as values arrive, so no query ever
//! rescans the stored data.
//!
//! # Example
//!
//! ```
//! use fixedstats::buffer::StatBuffer;
//!
//! let mut buf = StatBuffer::with_capacity(5);
//!
//! for value in [3, 1, 4, 1, 5] {
//!     buf.append(value)?;
//! }
//!
//! println!("Mean: {}", buf.mean());
//! println!("Stddev: {}", buf.stddev());
//! println!("Mode: {:?}", buf.mode());
//! println!("Range: {:?}", buf.range());
//! # Ok::<(), fixedstats::StatsError>(())
//! ```

mod stat_buffer;

pub use stat_buffer::StatBuffer;
