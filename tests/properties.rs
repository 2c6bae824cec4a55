//! Property-based tests using proptest.
//!
//! These tests check that the views agree with plain slice operations on
//! randomly generated inputs, and that they never read past their bounds.

use std::cell::Cell;

use proptest::prelude::*;
use seqview::prelude::*;
use seqview::{Bound, ErrorKind, MAX_SAFE_INTEGER};

// ============================================================================
// STRATEGIES
// ============================================================================

fn items_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..40)
}

/// A count that may exceed the input length.
fn count_strategy() -> impl Strategy<Value = u64> {
    0u64..60
}

// ============================================================================
// MATERIALIZATION
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: to_vec reproduces the input in fresh storage.
    #[test]
    fn prop_to_vec_copies(items in items_strategy()) {
        let copy = to_vec(items.as_slice()).unwrap();
        prop_assert_eq!(&copy, &items);
        if !items.is_empty() {
            prop_assert_ne!(copy.as_ptr(), items.as_ptr());
        }
    }

    /// Property: a bounded to_array is a prefix.
    #[test]
    fn prop_to_array_prefix(items in items_strategy(), n in count_strategy()) {
        let taken = to_array(items.clone(), n).unwrap();
        let expected = items.len().min(n as usize);
        prop_assert_eq!(taken.as_slice(), &items[..expected]);
    }

    /// Property: negative bounds are rejected, never clamped.
    #[test]
    fn prop_negative_bounds_rejected(n in i64::MIN..0) {
        prop_assert!(to_array(vec![1], n).unwrap_err().is_validation());
        prop_assert!(limit(vec![1], n).unwrap_err().is_validation());
        prop_assert!(skip(vec![1], n).unwrap_err().is_validation());
    }

    /// Property: fractional bounds are rejected.
    #[test]
    fn prop_fractional_bounds_rejected(whole in 0u32..1000, frac in 0.01f64..0.99) {
        let n = f64::from(whole) + frac;
        prop_assert!(to_array(vec![1], n).unwrap_err().is_validation());
        prop_assert!(limit(vec![1], n).unwrap_err().is_validation());
        prop_assert!(skip(vec![1], n).unwrap_err().is_validation());
    }

    /// Property: integers beyond the safe range are rejected.
    #[test]
    fn prop_unsafe_bounds_rejected(n in (MAX_SAFE_INTEGER + 1)..u64::MAX) {
        prop_assert!(to_array(vec![1], n).unwrap_err().is_validation());
    }
}

// ============================================================================
// VIEWS
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: limit keeps the first min(n, len) elements.
    #[test]
    fn prop_limit_is_prefix(items in items_strategy(), n in count_strategy()) {
        let taken = to_vec(limit(items.clone(), n).unwrap()).unwrap();
        let expected = items.len().min(n as usize);
        prop_assert_eq!(taken.as_slice(), &items[..expected]);
    }

    /// Property: skip drops the first min(n, len) elements.
    #[test]
    fn prop_skip_is_suffix(items in items_strategy(), n in count_strategy()) {
        let rest = to_vec(skip(items.clone(), n).unwrap()).unwrap();
        let from = items.len().min(n as usize);
        prop_assert_eq!(rest.as_slice(), &items[from..]);
    }

    /// Property: skip(S, 0) is S and limit(S, 0) is empty.
    #[test]
    fn prop_zero_counts(items in items_strategy()) {
        prop_assert_eq!(to_vec(skip(items.clone(), 0).unwrap()).unwrap(), items.clone());
        prop_assert!(to_vec(limit(items, 0).unwrap()).unwrap().is_empty());
    }

    /// Property: subseq(S, a, b) is S[a..b], clamped to the length.
    #[test]
    fn prop_subseq_is_slice(items in items_strategy(), a in count_strategy(), span in count_strategy()) {
        let b = a + span;
        let window = to_vec(subseq(items.clone(), a, b).unwrap()).unwrap();
        let len = items.len();
        let (a, b) = ((a as usize).min(len), (b as usize).min(len));
        prop_assert_eq!(window.as_slice(), &items[a..b]);
    }

    /// Property: reversed subseq bounds fail without pulling anything.
    #[test]
    fn prop_subseq_reversed_bounds(b in 0u64..50, gap in 1u64..50) {
        let pulls = Cell::new(0u32);
        let source = from_fn(|| {
            pulls.set(pulls.get() + 1);
            Step::<u32, ()>::Yielded(pulls.get())
        });
        let err = subseq(source, b + gap, b).unwrap_err();
        let is_range_bounds = matches!(
            err.kind(),
            ErrorKind::RangeBounds { start: Bound::Finite(s), end: Bound::Finite(e) }
                if *s == b + gap && *e == b
        );
        prop_assert!(is_range_bounds);
        prop_assert_eq!(pulls.get(), 0);
    }

    /// Property: limit over an endless source pulls exactly n elements.
    #[test]
    fn prop_limit_never_over_reads(n in 0u64..200) {
        let pulls = Cell::new(0u64);
        let source = from_fn(|| {
            pulls.set(pulls.get() + 1);
            Step::<u64, ()>::Yielded(pulls.get())
        });
        let taken = to_vec(limit(source, n).unwrap()).unwrap();
        prop_assert_eq!(taken.len() as u64, n);
        prop_assert_eq!(pulls.get(), n);
    }

    /// Property: safety_limit passes short inputs and fails on long ones.
    /// A bound of zero yields nothing.
    #[test]
    fn prop_safety_limit(items in items_strategy(), n in count_strategy()) {
        let result = to_vec(safety_limit(items.clone(), n).unwrap());
        if n == 0 {
            prop_assert!(result.unwrap().is_empty());
        } else if (items.len() as u64) < n {
            prop_assert_eq!(result.unwrap(), items);
        } else {
            let err = result.unwrap_err();
            let too_long = matches!(err.kind(), ErrorKind::SequenceTooLong { .. });
            prop_assert!(too_long);
        }
    }
}

// ============================================================================
// RANGES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: range(0, n, 1) yields 0..n.
    #[test]
    fn prop_unit_range(n in 0u32..500) {
        let values = to_vec(range(0.0, f64::from(n), 1.0).unwrap()).unwrap();
        let expected: Vec<f64> = (0..n).map(f64::from).collect();
        prop_assert_eq!(values, expected);
    }

    /// Property: integer ranges match a stepped integer loop in both directions.
    #[test]
    fn prop_stepped_range(start in -100i32..100, len in 0i32..100, step in 1i32..10, down: bool) {
        let (end, step) = if down { (start - len, -step) } else { (start + len, step) };
        let values = to_vec(range(start.into(), end.into(), step.into()).unwrap()).unwrap();
        let mut expected = Vec::new();
        let mut i = start;
        while (step > 0 && i < end) || (step < 0 && i > end) {
            expected.push(f64::from(i));
            i += step;
        }
        prop_assert_eq!(values, expected);
    }

    /// Property: zero increments are always rejected.
    #[test]
    fn prop_zero_increment(start in -1e6f64..1e6, end in -1e6f64..1e6) {
        let err = range(start, end, 0.0).unwrap_err();
        let zero_increment = matches!(err.kind(), ErrorKind::ZeroIncrement);
        prop_assert!(zero_increment);
    }
}
