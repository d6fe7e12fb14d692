//! Correctness and invariant tests for fixedstats
//!
//! These tests verify the invariants the buffer promises after every
//! mutation, the capacity boundaries, and the mode tie-break rule. They
//! complement the unit tests in each module by focusing on properties
//! that must hold across whole append sequences.

use fixedstats::traits::StatsError;
use fixedstats::StatBuffer;

/// Population standard deviation computed independently in one batch pass
fn batch_stddev(values: &[i64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<i64>() as f64 / n;
    let sq_dev: f64 = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    (sq_dev / n).sqrt()
}

// ============================================================================
// Per-append invariants
// ============================================================================

mod invariants {
    use super::*;

    const SERIES: &[i64] = &[12, -3, 40, 7, 7, 0, -3, 25, 7, 40];

    #[test]
    fn extrema_bound_every_inserted_value() {
        let mut buf = StatBuffer::with_capacity(SERIES.len());

        for (i, &value) in SERIES.iter().enumerate() {
            buf.append(value).unwrap();

            let min = buf.min().unwrap();
            let max = buf.max().unwrap();
            for &seen in &SERIES[..=i] {
                assert!(
                    min <= seen && seen <= max,
                    "after {} appends: {} not within [{}, {}]",
                    i + 1,
                    seen,
                    min,
                    max
                );
            }
        }
    }

    #[test]
    fn range_equals_max_minus_min_after_every_append() {
        let mut buf = StatBuffer::with_capacity(SERIES.len());

        for &value in SERIES {
            buf.append(value).unwrap();
            assert_eq!(
                buf.range(),
                Some(buf.max().unwrap() - buf.min().unwrap()),
                "range must equal max - min after appending {}",
                value
            );
        }
    }

    #[test]
    fn mean_equals_sum_over_count_after_every_append() {
        let mut buf = StatBuffer::with_capacity(SERIES.len());

        for &value in SERIES {
            buf.append(value).unwrap();
            let expected = buf.sum() as f64 / buf.len() as f64;
            assert!(
                (buf.mean() - expected).abs() < 1e-9,
                "mean {} != sum/count {}",
                buf.mean(),
                expected
            );
        }
    }

    #[test]
    fn incremental_stddev_matches_batch_pass() {
        let mut buf = StatBuffer::with_capacity(SERIES.len());

        for (i, &value) in SERIES.iter().enumerate() {
            buf.append(value).unwrap();
            let expected = batch_stddev(&SERIES[..=i]);
            assert!(
                (buf.stddev() - expected).abs() < 1e-9,
                "after {} appends: incremental stddev {} != batch stddev {}",
                i + 1,
                buf.stddev(),
                expected
            );
        }
    }

    #[test]
    fn count_never_exceeds_capacity() {
        let mut buf = StatBuffer::with_capacity(4);

        for i in 0..20 {
            let _ = buf.append(i);
            assert!(
                buf.len() <= buf.capacity(),
                "len {} exceeds capacity {}",
                buf.len(),
                buf.capacity()
            );
        }
        assert_eq!(buf.len(), 4);
    }
}

// ============================================================================
// Mode semantics
// ============================================================================

mod mode {
    use super::*;

    #[test]
    fn no_mode_while_all_values_distinct() {
        let mut buf = StatBuffer::with_capacity(8);

        for value in [9, 4, 7, 1] {
            buf.append(value).unwrap();
            assert_eq!(
                buf.mode(),
                None,
                "mode must stay None while every value occurred once"
            );
        }

        // First repeat creates a mode
        buf.append(4).unwrap();
        assert_eq!(buf.mode(), Some(4));
    }

    #[test]
    fn tie_resolves_to_first_value_reaching_frequency() {
        let mut buf = StatBuffer::with_capacity(4);
        for value in [3, 5, 3, 5] {
            buf.append(value).unwrap();
        }

        assert_eq!(
            buf.mode(),
            Some(3),
            "3 reached frequency 2 before 5, the tie must not move the mode"
        );
    }

    #[test]
    fn construction_path_agrees_with_incremental_path() {
        let values = [4, 1, 4, 9, 1];

        let constructed = StatBuffer::from_values(&values).unwrap();

        let mut appended = StatBuffer::with_capacity(values.len());
        for &value in &values {
            appended.append(value).unwrap();
        }

        assert_eq!(
            constructed.mode(),
            appended.mode(),
            "both paths must apply the same tie-break rule"
        );
        assert_eq!(constructed.mode(), Some(4));
    }
}

// ============================================================================
// Capacity boundaries
// ============================================================================

mod capacity {
    use super::*;

    #[test]
    fn single_append_boundary() {
        let mut buf = StatBuffer::with_capacity(3);

        buf.append(1).unwrap();
        buf.append(2).unwrap();
        buf.append(3).unwrap();

        let err = buf.append(4).unwrap_err();
        assert!(
            matches!(err, StatsError::CapacityExceeded { capacity: 3, .. }),
            "4th append into capacity 3 must fail, got {:?}",
            err
        );

        // Batch of one against zero remaining slots also fails
        assert!(buf.append_all(&[4]).is_err());

        // Failed appends left everything in place
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.sum(), 6);
    }

    #[test]
    fn batch_exactly_filling_is_rejected() {
        let mut buf = StatBuffer::with_capacity(5);
        buf.append_all(&[10, 20]).unwrap();

        // len 2 + batch 3 == capacity 5: rejected by the >= boundary
        let err = buf.append_all(&[30, 40, 50]).unwrap_err();
        assert_eq!(
            err,
            StatsError::CapacityExceeded {
                capacity: 5,
                len: 2,
                requested: 3,
            }
        );
        assert_eq!(buf.len(), 2, "rejected batch must not leak elements");

        // A batch of 2 leaves a slot free and passes
        buf.append_all(&[30, 40]).unwrap();
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn rejected_batch_changes_no_statistic() {
        let mut buf = StatBuffer::with_capacity(4);
        buf.append_all(&[5, 5]).unwrap();

        let snapshot = (buf.sum(), buf.min(), buf.max(), buf.mode(), buf.len());
        assert!(buf.append_all(&[100, 200]).is_err());
        assert_eq!(
            (buf.sum(), buf.min(), buf.max(), buf.mode(), buf.len()),
            snapshot,
            "rejected batch must leave every statistic untouched"
        );
    }
}

// ============================================================================
// Construction from an existing sequence
// ============================================================================

mod construction {
    use super::*;

    #[test]
    fn from_values_computes_all_statistics() {
        let buf = StatBuffer::from_values(&[4, 1, 4, 9, 1]).unwrap();

        assert_eq!(buf.min(), Some(1));
        assert_eq!(buf.max(), Some(9));
        assert_eq!(buf.range(), Some(8));
        assert_eq!(buf.sum(), 19);
        assert!((buf.mean() - 3.8).abs() < 1e-9);
        assert_eq!(buf.mode(), Some(4));
        assert!(
            (buf.stddev() - batch_stddev(&[4, 1, 4, 9, 1])).abs() < 1e-9,
            "construction stddev must match an independent batch pass"
        );
    }

    #[test]
    fn from_values_starts_full() {
        let buf = StatBuffer::from_values(&[1, 2, 3]).unwrap();

        assert!(buf.is_full());
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.remaining(), 0);

        let mut buf = buf;
        assert!(buf.append(4).is_err());
        assert!(buf.append_all(&[4]).is_err());
    }

    #[test]
    fn from_values_rejects_empty_input() {
        let err = StatBuffer::from_values(&[]).unwrap_err();
        assert!(
            matches!(err, StatsError::InvalidArgument { .. }),
            "empty input must be InvalidArgument, got {:?}",
            err
        );
    }
}

// ============================================================================
// Formatting
// ============================================================================

mod formatting {
    use super::*;

    #[test]
    fn display_lists_only_inserted_values() {
        let mut buf = StatBuffer::with_capacity(31);
        buf.append_all(&[7, -2, 7]).unwrap();

        // 28 unused slots must never appear
        assert_eq!(buf.to_string(), "[7, -2, 7]");
    }

    #[test]
    fn display_empty_and_single() {
        let empty = StatBuffer::with_capacity(4);
        assert_eq!(empty.to_string(), "[]");

        let mut single = StatBuffer::with_capacity(4);
        single.append(42).unwrap();
        assert_eq!(single.to_string(), "[42]");
    }
}
