use crate::{Bound, Error, IntoBound, LimitView, Result, Sequence, Skip, limit, skip};

/// Push-object returned by [`subseq`].
pub type Subseq<S> = LimitView<Skip<S>>;

/// The elements of `seq` at positions `start..end`.
///
/// Both bounds are validated, and `end` must not be before `start`, before
/// anything is pulled. An unbounded `end` keeps everything after `start`.
///
/// ```rust
/// use seqview::prelude::*;
///
/// let seq = vec![10, 11, 12, 13, 14, 15];
/// assert_eq!(to_vec(subseq(seq.clone(), 1, 5).unwrap()).unwrap(), vec![11, 12, 13, 14]);
/// assert_eq!(to_vec(subseq(seq.clone(), 4, f64::INFINITY).unwrap()).unwrap(), vec![14, 15]);
/// assert!(subseq(seq, 5, 2).is_err());
/// ```
pub fn subseq<S: Sequence>(seq: S, start: impl IntoBound, end: impl IntoBound) -> Result<Subseq<S>> {
    let start = start.into_bound("start")?;
    let end = end.into_bound("end")?;
    if end < start {
        return Err(Error::range_bounds(start, end));
    }
    let span = match (start, end) {
        (Bound::Finite(start), Bound::Finite(end)) => Bound::Finite(end - start),
        _ => Bound::Unbounded,
    };
    limit(skip(seq, start)?, span)
}
