use either::Either;
use log::debug;

use crate::{
    Bound, IntoBound, Pull, Result, Resume, Sequence,
    pull::{Empty, empty},
};

/// Push-object returned by [`skip`].
///
/// `Left` is the untouched source (count of zero); `Right` is the single-pass
/// remainder, or an empty sequence when the count was unbounded.
pub type Skip<S> = Either<
    <S as Sequence>::Iterable,
    Resume<Either<<S as Sequence>::Iterator, Empty<<S as Sequence>::Item>>>,
>;

/// Skip the first `count` elements of `seq`.
///
/// The skipped prefix is pulled eagerly, stopping early if the source runs
/// out; the rest stays lazy. A count of zero returns `iterable(seq)` without
/// pulling anything. An unbounded count skips everything and returns an empty
/// sequence without touching the source.
///
/// ```rust
/// use seqview::prelude::*;
///
/// assert_eq!(to_vec(skip(vec![7, 8, 9], 2).unwrap()).unwrap(), vec![9]);
/// assert!(to_vec(skip(vec![7, 8, 9], 7).unwrap()).unwrap().is_empty());
/// assert!(skip(vec![7, 8, 9], -1).is_err());
/// ```
pub fn skip<S: Sequence>(seq: S, count: impl IntoBound) -> Result<Skip<S>> {
    let count = match count.into_bound("count")? {
        Bound::Unbounded => return Ok(Either::Right(Resume::new(Either::Right(empty())))),
        Bound::Finite(0) => return Ok(Either::Left(seq.into_iterable()?)),
        Bound::Finite(n) => n,
    };

    let mut iter = seq.into_iterator()?;
    for skipped in 0..count {
        if iter.step()?.is_complete() {
            debug!("skip: source exhausted after {skipped} of {count} elements");
            break;
        }
    }
    Ok(Either::Right(Resume::new(Either::Left(iter))))
}
