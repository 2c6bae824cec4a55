use log::trace;

use crate::{Bound, IntoBound, Pull, Push, Result, Sequence, Step, limit};

/// Collect at most `max_size` elements of `seq` into a new `Vec`.
///
/// This is the only eager operation of the crate. The bound is validated
/// before anything is pulled; a bound of zero returns an empty `Vec` without
/// touching `seq`. Errors raised while pulling are returned as-is, and the
/// elements collected so far are dropped.
///
/// The result never shares storage with `seq`, even when `seq` is already a
/// `Vec`.
///
/// ```rust
/// use seqview::prelude::*;
///
/// assert_eq!(to_array(vec![5, 6, 3], 2).unwrap(), vec![5, 6]);
/// assert_eq!(to_array(range_from(1.0).unwrap(), 3).unwrap(), vec![1.0, 2.0, 3.0]);
/// assert!(to_array(vec![1], -1).is_err());
/// ```
pub fn to_array<S: Sequence>(seq: S, max_size: impl IntoBound) -> Result<Vec<S::Item>> {
    match max_size.into_bound("max_size")? {
        Bound::Unbounded => drain(seq),
        Bound::Finite(0) => Ok(Vec::new()),
        Bound::Finite(n) => drain(limit(seq, n)?),
    }
}

/// Collect every element of `seq` into a new `Vec`.
///
/// Equivalent to `to_array(seq, f64::INFINITY)`; does not terminate on an
/// unbounded source.
pub fn to_vec<S: Sequence>(seq: S) -> Result<Vec<S::Item>> {
    drain(seq)
}

fn drain<S: Sequence>(seq: S) -> Result<Vec<S::Item>> {
    let mut iterable = seq.into_iterable()?;
    let mut cursor = iterable.pull()?;
    let mut items = Vec::new();
    loop {
        match cursor.step()? {
            Step::Yielded(item) => items.push(item),
            Step::Complete(_) => break,
        }
    }
    trace!("drained {} elements", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, FromFn, Resume, elements, from_fn, safety_limit};

    #[test]
    fn test_to_vec_copies() {
        let source = vec![7, 8, 9];
        let copy = to_vec(source.as_slice()).unwrap();
        assert_eq!(copy, source);
        assert_ne!(copy.as_ptr(), source.as_ptr());
    }

    #[test]
    fn test_to_array_bounds() {
        let source = elements(vec!["5", "foo", "3"]);
        assert_eq!(to_array(source, 2).unwrap(), vec!["5", "foo"]);
        assert_eq!(to_array(vec![1, 2], f64::INFINITY).unwrap(), vec![1, 2]);
        assert_eq!(to_array(vec![1, 2], 10).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_to_array_rejects_bad_sizes() {
        for err in [
            to_array(vec![1], -1).unwrap_err(),
            to_array(vec![1], 0.5).unwrap_err(),
            to_array(vec![1], f64::NAN).unwrap_err(),
            to_array(vec![1], 2f64.powi(60)).unwrap_err(),
        ] {
            assert!(matches!(err.kind(), ErrorKind::Validation { .. }), "{err}");
        }
    }

    #[test]
    fn test_to_array_zero_never_touches_source() {
        let mut pulls = 0u32;
        let source: FromFn<_, ()> = from_fn(|| {
            pulls += 1;
            Step::Yielded(pulls)
        });
        assert!(to_array(source, 0).unwrap().is_empty());
        assert_eq!(pulls, 0);
    }

    #[test]
    fn test_drain_twice_after_partial_consumption() {
        let mut source = elements(vec![1, 2, 3, 4]);
        source.step().unwrap();
        let mut adapter = Resume::new(source);
        assert_eq!(to_vec(adapter.by_ref_push()).unwrap(), vec![2, 3, 4]);
        assert!(to_vec(adapter).unwrap().is_empty());
    }

    #[test]
    fn test_errors_propagate() {
        let err = to_array(safety_limit(vec![1, 2, 3], 2).unwrap(), 5).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::SequenceTooLong { length: 2 }));
        // the limit stops before the guard trips
        assert_eq!(to_array(safety_limit(vec![1, 2, 3], 2).unwrap(), 2).unwrap(), vec![1, 2]);
    }
}
